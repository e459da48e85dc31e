//! Run output and per-round artifacts
//!
//! Everything a run produced travels in one [`ResolutionOutput`] value:
//! the merged maps the caller came for, the per-round artifacts for
//! anyone inspecting how the run unfolded, the warnings, and a small
//! summary for reporting. All of it serializes, so a writer can persist
//! the output in whatever format it likes; the engine does no I/O.

use isogloss_core::{
    CanonicalCode, LanguageCode, Name, ResolutionWarning, ResolvedEntity, SecondaryRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Artifacts of one resolution round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRound {
    /// One-based round number
    pub index: usize,
    /// Names this round resolved (the seed, or the previous round's discoveries)
    pub input_names: BTreeSet<Name>,
    /// Entity per input name
    pub entities: BTreeMap<Name, ResolvedEntity>,
    /// Canonical code selected per input name
    pub codes: BTreeMap<Name, CanonicalCode>,
    /// Distinct known codes fed to the secondary lookup
    pub known_codes: BTreeSet<LanguageCode>,
    /// Secondary records fetched for those codes
    pub secondary: BTreeMap<LanguageCode, SecondaryRecord>,
    /// Names found in the secondary data that were not yet known
    pub discovered: BTreeSet<Name>,
}

/// Counts a reporting step needs, computed over the merged entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Names the run resolved, across all rounds
    pub total_names: usize,
    /// Names whose entity carries at least one attribute
    pub names_with_attributes: usize,
}

impl ResolutionSummary {
    /// Compute the summary from a merged entity map
    pub fn from_entities(entities: &BTreeMap<Name, ResolvedEntity>) -> Self {
        Self {
            total_names: entities.len(),
            names_with_attributes: entities.values().filter(|e| !e.is_empty()).count(),
        }
    }
}

/// Complete result of a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOutput {
    /// Entity per name, merged across rounds (most recent round wins)
    pub entities: BTreeMap<Name, ResolvedEntity>,
    /// Secondary record per known code, merged across rounds
    pub secondary: BTreeMap<LanguageCode, SecondaryRecord>,
    /// Per-round artifacts, in round order
    pub rounds: Vec<ResolutionRound>,
    /// Non-fatal conditions observed during the run
    pub warnings: Vec<ResolutionWarning>,
    /// Counts over the merged entities
    pub summary: ResolutionSummary,
}

// ============================================================================
// Tests
// ============================================================================
