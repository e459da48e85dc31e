//! Resolution engine for Isogloss
//!
//! This crate turns loaded reference tables into answers: which canonical
//! code identifies each collected name, and which further name variants
//! the reference data knows for those codes.
//!
//! The pipeline, stage by stage:
//! - resolver: join each name against the reference tables, with a
//!   cross-reference fallback key between stages
//! - selector: pick the canonical code per name by candidate priority
//! - secondary: fetch per-code name observations in one table scan
//! - discovery: find names the caller has not seen yet
//! - orchestrator: feed discoveries back through bounded rounds and merge
//! - projection / regions: condense entities into display profiles
//! - datasets: canonical wiring for the reference datasets
//!
//! Everything is deterministic: ordered maps on every surface, and the
//! parallel resolve keeps name order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod datasets;
pub mod discovery;
pub mod orchestrator;
pub mod output;
pub mod projection;
pub mod regions;
pub mod resolver;
pub mod secondary;
pub mod selector;

pub use datasets::standard_plan;
pub use discovery::discover_new;
pub use orchestrator::{
    Phase, ResolutionConfig, ResolutionOrchestrator, ResolutionPlan, DEFAULT_MAX_ROUNDS,
};
pub use output::{ResolutionOutput, ResolutionRound, ResolutionSummary};
pub use projection::{EntityProjector, ProjectionSpec, VarietyProfile};
pub use regions::{RegionDirectory, RegionInfo, RegionTableSpec};
pub use resolver::{CrossRef, JoinOutcome, JoinStage, NameResolver};
pub use secondary::{SecondaryLookup, SecondaryTableSpec};
pub use selector::{known_codes, CodePriority, CodeSelector};
