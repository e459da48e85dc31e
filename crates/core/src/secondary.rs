//! Per-code name-variant observations
//!
//! The secondary dataset is keyed by language code rather than by name.
//! For each code it yields the set of name variants attested for that
//! language, and for each variant the regions it is used in together with
//! a usage designation. [`SecondaryRecord`] holds that nested structure
//! for one code.

use crate::types::{Name, RegionId, UsageType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name variants observed for one language code.
///
/// The record is purely additive: observations from many table rows land
/// in the same nested map, and a repeated `(name, region)` pair keeps the
/// most recent usage designation. A code that matched nothing in the
/// secondary table still gets a record; it is just empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecondaryRecord {
    names: BTreeMap<Name, BTreeMap<RegionId, UsageType>>,
}

impl SecondaryRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` is used in `region` with the given designation.
    ///
    /// A repeated `(name, region)` pair overwrites the usage; distinct
    /// regions for the same name accumulate.
    pub fn insert_observation(&mut self, name: Name, region: RegionId, usage: UsageType) {
        self.names.entry(name).or_default().insert(region, usage);
    }

    /// Regions attested for one name variant
    pub fn regions(&self, name: &Name) -> Option<&BTreeMap<RegionId, UsageType>> {
        self.names.get(name)
    }

    /// Name variants in this record, in order
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.names.keys()
    }

    /// Whether a name variant is present
    pub fn contains_name(&self, name: &Name) -> bool {
        self.names.contains_key(name)
    }

    /// Number of distinct name variants
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the record holds no observations
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over name variants and their region maps
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &BTreeMap<RegionId, UsageType>)> {
        self.names.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
