//! Identifier types for the resolution engine
//!
//! All identifiers are thin wrappers over `String`. They exist to keep the
//! different key spaces (names, language codes, regions, attribute namespaces)
//! from being mixed up at compile time, not to impose any format:
//! reference data is taken verbatim.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A free-text label for a language variety, as collected from a source.
///
/// Names are case- and punctuation-sensitive and are never normalized:
/// "Kurmancî" and "Kurmanji" are two distinct names even when they denote
/// the same variety. Matching is strictly verbatim.
///
/// `Name` is `Ord` so that name sets and maps iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Create a new Name. The input is stored verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows set/map lookups by &str without allocating a Name.
impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An identifying code for a language, e.g. an ISO 639-3 code.
///
/// The engine treats codes as opaque strings; which standard they belong to
/// is the loader's contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a new LanguageCode
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A region identifier from the secondary dataset, e.g. a country code like "IQ".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(String);

impl RegionId {
    /// Create a new RegionId
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RegionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A usage designation for a name within a region, e.g. "L" (primary language
/// name) or "D" (dialect name) in the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UsageType(String);

impl UsageType {
    /// Create a new UsageType
    pub fn new(usage: impl Into<String>) -> Self {
        Self(usage.into())
    }

    /// Get the usage designation as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UsageType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Provenance namespace for resolved attributes.
///
/// Every attribute written onto a [`crate::ResolvedEntity`] is filed under the
/// tag of the join stage that produced it (e.g. `"dialect_geo"` for the
/// dialect-level geography table, `"language"` for the language-level table).
/// Attributes from different sources therefore cannot collide, no matter how
/// the underlying tables name their columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceTag(String);

impl SourceTag {
    /// Create a new SourceTag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Address of one attribute on a resolved entity: source namespace + field name.
///
/// Used wherever the engine needs to be told where a value lives without
/// interpreting column names itself: code-candidate priority lists, cross-table
/// fallback keys, and projection precedence lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttrRef {
    /// Source namespace the attribute was filed under
    pub source: SourceTag,
    /// Field name within that namespace (the originating table's column name)
    pub field: String,
}

impl AttrRef {
    /// Create a new attribute reference
    pub fn new(source: SourceTag, field: impl Into<String>) -> Self {
        Self {
            source,
            field: field.into(),
        }
    }
}

impl fmt::Display for AttrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.source, self.field)
    }
}

// ============================================================================
// Tests
// ============================================================================
