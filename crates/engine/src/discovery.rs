//! Name discovery from secondary data
//!
//! Secondary records surface name variants the caller never asked about.
//! Discovery is the set difference that decides whether another
//! resolution round is worth running.

use isogloss_core::{LanguageCode, Name, SecondaryRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Names present in the secondary records but not yet known.
///
/// The union runs across every record, so a variant attested under two
/// codes is reported once. Feeding the result back into `known` and
/// calling again over the same records yields the empty set.
pub fn discover_new(
    known: &BTreeSet<Name>,
    secondary: &BTreeMap<LanguageCode, SecondaryRecord>,
) -> BTreeSet<Name> {
    let mut fresh = BTreeSet::new();
    for record in secondary.values() {
        for name in record.names() {
            if !known.contains(name) {
                fresh.insert(name.clone());
            }
        }
    }
    fresh
}

// ============================================================================
// Tests
// ============================================================================
