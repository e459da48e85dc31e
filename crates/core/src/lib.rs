//! Core types for Isogloss
//!
//! This crate defines the foundational types used throughout the system:
//! - Name: free-text label for a language variety, matched verbatim
//! - LanguageCode / RegionId / UsageType: reference-data identifiers
//! - SourceTag / AttrRef: attribute provenance and addressing
//! - Schema / ColumnId / Record: the flat reference-table row model
//! - ResolvedEntity: per-name attributes accumulated across table joins
//! - SecondaryRecord: per-code name-variant observations (region → usage)
//! - CanonicalCode: the selected identifying code, or the unknown sentinel
//! - Error / ResolutionWarning: the fatal/non-fatal condition split

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod entity;
pub mod error;
pub mod record;
pub mod secondary;
pub mod types;
pub mod warning;

pub use code::CanonicalCode;
pub use entity::ResolvedEntity;
pub use error::{Error, Result};
pub use record::{ColumnId, Record, Schema};
pub use secondary::SecondaryRecord;
pub use types::{AttrRef, LanguageCode, Name, RegionId, SourceTag, UsageType};
pub use warning::ResolutionWarning;
