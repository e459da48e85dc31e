//! Non-fatal conditions observed during a run
//!
//! Resolution never aborts over data it merely dislikes. Conditions worth
//! telling the caller about, without failing the run, are collected as
//! warnings on the output.

use crate::types::{Name, SourceTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A condition the engine noticed and worked around
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionWarning {
    /// More than one row of a join stage matched the same name.
    ///
    /// All matching rows were applied in table order, so the last row's
    /// values stand for any field they share.
    AmbiguousMatch {
        /// Name that matched multiple rows
        name: Name,
        /// Join stage the rows came from
        source: SourceTag,
        /// Number of rows that matched
        matches: usize,
    },

    /// The round bound was reached with names still undiscovered.
    ///
    /// The listed names were found in the secondary data of the final
    /// round but never fed back through resolution.
    UnterminatedDiscovery {
        /// Names left unresolved when the run stopped
        pending: BTreeSet<Name>,
    },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousMatch { name, source, matches } => {
                write!(f, "name '{name}' matched {matches} rows in source '{source}'")
            }
            Self::UnterminatedDiscovery { pending } => {
                write!(f, "round bound reached with {} name(s) undiscovered", pending.len())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
