//! Round orchestration
//!
//! The orchestrator owns one configured pipeline and drives it through
//! bounded rounds:
//!
//! ```text
//! Seed -> Resolve(k) -> Discover(k) -> Resolve(k+1) | Merge -> Output
//! ```
//!
//! Each round resolves the pending names, selects their canonical codes,
//! fetches secondary records for the known codes, and checks those
//! records for names not seen before. Fresh names become the next round's
//! input until discovery comes up empty or the round bound is reached;
//! hitting the bound with names still pending is reported as a warning,
//! not swallowed. Rounds never share mutable state; each leaves a
//! [`ResolutionRound`] artifact and the merge folds them in order.

use crate::discovery::discover_new;
use crate::output::{ResolutionOutput, ResolutionRound, ResolutionSummary};
use crate::resolver::{JoinOutcome, JoinStage, NameResolver};
use crate::secondary::{SecondaryLookup, SecondaryTableSpec};
use crate::selector::{known_codes, CodePriority, CodeSelector};
use isogloss_core::{
    Error, LanguageCode, Name, ResolutionWarning, ResolvedEntity, Result, SecondaryRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, info, warn};

/// Default round bound: one pass over the seed names and one pass over
/// whatever that discovers.
pub const DEFAULT_MAX_ROUNDS: usize = 2;

/// Tunable knobs for a resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Maximum number of resolution rounds, at least 1
    pub max_rounds: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ResolutionConfig {
    /// Override the round bound
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Check the configuration is runnable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the round bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(Error::InvalidConfig {
                reason: "round bound must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Everything a pipeline is wired from: join stages, the code priority,
/// and the secondary table wiring.
#[derive(Debug, Clone)]
pub struct ResolutionPlan {
    /// Join stages in resolution order
    pub stages: Vec<JoinStage>,
    /// Candidate attributes for canonical code selection
    pub code_priority: CodePriority,
    /// Column wiring for the secondary table
    pub secondary: SecondaryTableSpec,
}

/// Pipeline phase, used to label progress in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting the seed names
    Seed,
    /// Resolving the pending names of round k
    Resolve(usize),
    /// Scanning secondary data of round k for unseen names
    Discover(usize),
    /// Folding round artifacts into the merged maps
    Merge,
    /// Assembling the final output
    Output,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed => write!(f, "seed"),
            Self::Resolve(round) => write!(f, "resolve({round})"),
            Self::Discover(round) => write!(f, "discover({round})"),
            Self::Merge => write!(f, "merge"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Drives bounded resolution rounds over one configured pipeline.
#[derive(Debug, Clone)]
pub struct ResolutionOrchestrator {
    resolver: NameResolver,
    selector: CodeSelector,
    secondary: SecondaryLookup,
    config: ResolutionConfig,
}

impl ResolutionOrchestrator {
    /// Wire an orchestrator from a plan and a config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero round bound or an empty
    /// stage list, and [`Error::ColumnOutOfRange`] for any wired column
    /// missing from its table.
    pub fn new(plan: ResolutionPlan, config: ResolutionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resolver: NameResolver::new(plan.stages)?,
            selector: CodeSelector::new(plan.code_priority),
            secondary: SecondaryLookup::new(plan.secondary)?,
            config,
        })
    }

    /// Wire an orchestrator with the default config
    pub fn with_defaults(plan: ResolutionPlan) -> Result<Self> {
        Self::new(plan, ResolutionConfig::default())
    }

    /// The config this orchestrator runs with
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Run the pipeline over a seed set of names.
    ///
    /// Running twice over the same seed and tables yields identical
    /// output. Data-level oddities surface as warnings on the output;
    /// nothing observed at run time is an error.
    pub fn run(&self, seed: BTreeSet<Name>) -> ResolutionOutput {
        debug!(
            target: "isogloss::rounds",
            phase = %Phase::Seed,
            names = seed.len(),
            max_rounds = self.config.max_rounds,
            "resolution started"
        );

        let mut known = seed.clone();
        let mut pending = seed;
        let mut rounds: Vec<ResolutionRound> = Vec::new();
        let mut warnings: Vec<ResolutionWarning> = Vec::new();

        for round in 1..=self.config.max_rounds {
            if pending.is_empty() {
                break;
            }

            debug!(
                target: "isogloss::rounds",
                phase = %Phase::Resolve(round),
                names = pending.len(),
                "resolving names"
            );
            let JoinOutcome {
                entities,
                warnings: round_warnings,
            } = self.resolver.resolve(&pending);
            warnings.extend(round_warnings);

            let codes = self.selector.select_all(&entities);
            let known_codes = known_codes(&codes);
            let secondary = self.secondary.lookup(&known_codes);

            debug!(
                target: "isogloss::rounds",
                phase = %Phase::Discover(round),
                codes = known_codes.len(),
                "scanning secondary records"
            );
            let discovered = discover_new(&known, &secondary);

            info!(
                target: "isogloss::rounds",
                round,
                resolved = entities.len(),
                known_codes = known_codes.len(),
                discovered = discovered.len(),
                "round complete"
            );

            rounds.push(ResolutionRound {
                index: round,
                input_names: pending.clone(),
                entities,
                codes,
                known_codes,
                secondary,
                discovered: discovered.clone(),
            });

            if discovered.is_empty() {
                break;
            }
            if round == self.config.max_rounds {
                warn!(
                    target: "isogloss::rounds",
                    pending = discovered.len(),
                    "round bound reached with names undiscovered"
                );
                warnings.push(ResolutionWarning::UnterminatedDiscovery { pending: discovered });
                break;
            }

            known.extend(discovered.iter().cloned());
            pending = discovered;
        }

        debug!(
            target: "isogloss::rounds",
            phase = %Phase::Merge,
            rounds = rounds.len(),
            "merging round artifacts"
        );
        let mut entities: BTreeMap<Name, ResolvedEntity> = BTreeMap::new();
        let mut secondary: BTreeMap<LanguageCode, SecondaryRecord> = BTreeMap::new();
        for round in &rounds {
            entities.extend(round.entities.iter().map(|(k, v)| (k.clone(), v.clone())));
            secondary.extend(round.secondary.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let summary = ResolutionSummary::from_entities(&entities);
        debug!(
            target: "isogloss::rounds",
            phase = %Phase::Output,
            names = summary.total_names,
            with_attributes = summary.names_with_attributes,
            warnings = warnings.len(),
            "resolution finished"
        );

        ResolutionOutput {
            entities,
            secondary,
            rounds,
            warnings,
            summary,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
