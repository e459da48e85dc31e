//! Canonical code selection result
//!
//! Selecting an identifying code for a name either finds one of the
//! candidate attributes populated or exhausts the priority list. Both
//! outcomes are values: downstream consumers index secondary lookups by
//! the known codes and still see every name in the output, unknowns
//! included.

use crate::types::LanguageCode;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifying code selected for a name, or the explicit unknown.
///
/// Serializes as a plain string: the code itself, or the reserved label
/// `"unknown"`. A real language code spelled exactly `"unknown"` would
/// collide with the sentinel; no code registry in use assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalCode {
    /// A code was found among the candidate attributes
    Known(LanguageCode),
    /// Every candidate was absent or empty
    Unknown,
}

impl CanonicalCode {
    /// Label the unknown variant renders as
    pub const UNKNOWN_LABEL: &'static str = "unknown";

    /// The code, if one was selected
    pub fn known(&self) -> Option<&LanguageCode> {
        match self {
            Self::Known(code) => Some(code),
            Self::Unknown => None,
        }
    }

    /// Whether selection exhausted the priority list
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(code) => write!(f, "{code}"),
            Self::Unknown => write!(f, "{}", Self::UNKNOWN_LABEL),
        }
    }
}

impl From<LanguageCode> for CanonicalCode {
    fn from(code: LanguageCode) -> Self {
        Self::Known(code)
    }
}

impl Serialize for CanonicalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Known(code) => serializer.serialize_str(code.as_str()),
            Self::Unknown => serializer.serialize_str(Self::UNKNOWN_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for CanonicalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == Self::UNKNOWN_LABEL {
            Ok(Self::Unknown)
        } else {
            Ok(Self::Known(LanguageCode::new(raw)))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
