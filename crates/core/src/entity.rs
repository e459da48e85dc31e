//! Per-name attribute accumulation
//!
//! A [`ResolvedEntity`] is everything the join stages have learned about one
//! name: a two-level map of source namespace to field name to value. The
//! outer level keeps provenance apart, so attributes from the dialect-level
//! geography table and the language-level table live side by side and never
//! shadow each other.

use crate::types::{AttrRef, SourceTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes resolved for a single name, keyed by source namespace.
///
/// An entity exists for every name that was ever resolved, even when no
/// join stage matched it; such an entity is simply empty. Both map levels
/// are ordered so serialized output and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedEntity {
    attrs: BTreeMap<SourceTag, BTreeMap<String, String>>,
}

impl ResolvedEntity {
    /// Create an empty entity
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attribute under a source namespace.
    ///
    /// Writing the same `(source, field)` twice keeps the later value;
    /// later table rows win within a stage, later rounds win across rounds.
    pub fn insert(&mut self, source: &SourceTag, field: impl Into<String>, value: impl Into<String>) {
        self.attrs
            .entry(source.clone())
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Look up one attribute by source and field name
    pub fn get(&self, source: &SourceTag, field: &str) -> Option<&str> {
        self.attrs
            .get(source)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
    }

    /// Look up one attribute through an [`AttrRef`] address
    pub fn get_attr(&self, attr: &AttrRef) -> Option<&str> {
        self.get(&attr.source, &attr.field)
    }

    /// All fields recorded under one source namespace
    pub fn namespace(&self, source: &SourceTag) -> Option<&BTreeMap<String, String>> {
        self.attrs.get(source)
    }

    /// Source namespaces present on this entity, in order
    pub fn namespaces(&self) -> impl Iterator<Item = &SourceTag> {
        self.attrs.keys()
    }

    /// Whether no join stage has contributed anything
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Total number of attributes across all namespaces
    pub fn attr_count(&self) -> usize {
        self.attrs.values().map(BTreeMap::len).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
