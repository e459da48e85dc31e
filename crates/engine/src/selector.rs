//! Canonical code selection
//!
//! After the join stages have run, each entity may carry several code
//! candidates under different namespaces: a dialect-level code list, a
//! language-level code, a closest-match code. A [`CodeSelector`] walks a
//! [`CodePriority`] list and takes the first candidate that is present
//! and non-empty; an empty candidate is skipped, not selected.

use isogloss_core::{
    AttrRef, CanonicalCode, Error, LanguageCode, Name, ResolvedEntity, Result,
};
use std::collections::{BTreeMap, BTreeSet};

/// Ordered list of attribute addresses to try as the identifying code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePriority(Vec<AttrRef>);

impl CodePriority {
    /// Build a priority list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] on an empty list; a selector that
    /// can never select anything is a wiring mistake.
    pub fn new(attrs: Vec<AttrRef>) -> Result<Self> {
        if attrs.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "code priority needs at least one candidate attribute".to_string(),
            });
        }
        Ok(Self(attrs))
    }

    /// Candidate addresses in priority order
    pub fn attrs(&self) -> &[AttrRef] {
        &self.0
    }
}

/// Selects a canonical code per entity by priority.
#[derive(Debug, Clone)]
pub struct CodeSelector {
    priority: CodePriority,
}

impl CodeSelector {
    /// Create a selector over the given priority list
    pub fn new(priority: CodePriority) -> Self {
        Self { priority }
    }

    /// Select the code for one entity: the first candidate attribute that
    /// is present and non-empty, else [`CanonicalCode::Unknown`].
    pub fn select(&self, entity: &ResolvedEntity) -> CanonicalCode {
        for attr in self.priority.attrs() {
            if let Some(value) = entity.get_attr(attr) {
                if !value.is_empty() {
                    return CanonicalCode::Known(LanguageCode::new(value));
                }
            }
        }
        CanonicalCode::Unknown
    }

    /// Select a code for every entity, keyed like the input map
    pub fn select_all(
        &self,
        entities: &BTreeMap<Name, ResolvedEntity>,
    ) -> BTreeMap<Name, CanonicalCode> {
        entities
            .iter()
            .map(|(name, entity)| (name.clone(), self.select(entity)))
            .collect()
    }
}

/// The distinct known codes in a selection, unknowns dropped.
pub fn known_codes(codes: &BTreeMap<Name, CanonicalCode>) -> BTreeSet<LanguageCode> {
    codes
        .values()
        .filter_map(|code| code.known().cloned())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
