//! Reference table indexes for Isogloss
//!
//! This crate holds loaded reference tables in memory and answers the
//! queries the engine runs against them:
//! - TableIndex: a schema-checked, immutable table of string records
//! - Match: the outcome of a point lookup (miss, unique, ambiguous)
//!
//! Tables are loaded once and scanned many times; nothing here mutates
//! after [`TableIndex::load`] returns.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;

pub use index::{Match, TableIndex};
