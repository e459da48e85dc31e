//! # Isogloss
//!
//! Iterative cross-reference resolution for language and dialect names.
//!
//! Names collected in the field rarely match reference data one-to-one:
//! the same variety goes by different names in different datasets, and
//! the name a dataset indexes is not always the name a speaker uses.
//! Isogloss resolves a seed set of names against reference tables,
//! selects a canonical code per name, looks those codes up in a
//! secondary per-code name index, and feeds newly surfaced name variants
//! back through resolution for a bounded number of rounds.
//!
//! The workspace is layered:
//! - `isogloss-core`: identifier newtypes, the row model, entities,
//!   secondary records, errors and warnings
//! - `isogloss-tables`: schema-checked in-memory reference tables
//! - `isogloss-engine`: join stages, code selection, secondary lookup,
//!   discovery, round orchestration, profiles
//!
//! This crate re-exports the public surface of all three.
//!
//! # Example
//!
//! ```
//! use isogloss::{
//!     AttrRef, CodePriority, JoinStage, Name, Record, ResolutionOrchestrator,
//!     ResolutionPlan, Schema, SecondaryTableSpec, SourceTag, TableIndex,
//! };
//! use std::collections::BTreeSet;
//! use std::sync::Arc;
//!
//! # fn main() -> isogloss::Result<()> {
//! let geo = Arc::new(TableIndex::load(
//!     "geo",
//!     Schema::new(["glottocode", "name", "isocodes"])?,
//!     vec![Record::from_fields(["zaza1246", "Zazaki", "zza"])],
//! )?);
//! let index = Arc::new(TableIndex::load(
//!     "index",
//!     Schema::new(["code", "region", "usage", "name"])?,
//!     vec![Record::from_fields(["zza", "TR", "L", "Zaza"])],
//! )?);
//!
//! let tag = SourceTag::new("geo");
//! let name_column = geo.column("name").expect("geo schema has a name column");
//! let plan = ResolutionPlan {
//!     stages: vec![JoinStage::new(Arc::clone(&geo), tag.clone(), name_column)],
//!     code_priority: CodePriority::new(vec![AttrRef::new(tag, "isocodes")])?,
//!     secondary: SecondaryTableSpec {
//!         code_column: index.column("code").expect("index schema has a code column"),
//!         region_column: index.column("region").expect("index schema has a region column"),
//!         usage_column: index.column("usage").expect("index schema has a usage column"),
//!         name_column: index.column("name").expect("index schema has a name column"),
//!         table: index,
//!     },
//! };
//!
//! let orchestrator = ResolutionOrchestrator::with_defaults(plan)?;
//! let output = orchestrator.run(BTreeSet::from([Name::new("Zazaki")]));
//!
//! // "Zaza" surfaced from the secondary index and was resolved too
//! assert_eq!(output.summary.total_names, 2);
//! assert!(output.warnings.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Core types
// ============================================================================

pub use isogloss_core::{
    AttrRef, CanonicalCode, ColumnId, Error, LanguageCode, Name, Record, RegionId,
    ResolutionWarning, ResolvedEntity, Result, Schema, SecondaryRecord, SourceTag, UsageType,
};

// ============================================================================
// Reference tables
// ============================================================================

pub use isogloss_tables::{Match, TableIndex};

// ============================================================================
// Engine
// ============================================================================

pub use isogloss_engine::{
    datasets, discover_new, known_codes, standard_plan, CodePriority, CodeSelector, CrossRef,
    EntityProjector, JoinOutcome, JoinStage, NameResolver, Phase, ProjectionSpec, RegionDirectory,
    RegionInfo, RegionTableSpec, ResolutionConfig, ResolutionOrchestrator, ResolutionOutput,
    ResolutionPlan, ResolutionRound, ResolutionSummary, SecondaryLookup, SecondaryTableSpec,
    VarietyProfile, DEFAULT_MAX_ROUNDS,
};
