//! Flat row model for reference tables
//!
//! Reference data reaches the engine as rectangular string tables:
//! a [`Schema`] naming the columns, and one [`Record`] per data row.
//! How the rows got here (CSV, TSV, a test fixture) is the loader's
//! business; the engine only ever addresses fields positionally
//! through [`ColumnId`].

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// Positional handle for one column of a [`Schema`].
///
/// A `ColumnId` is only meaningful against the schema it was resolved
/// from. Handing a `ColumnId` from one table to another is not a type
/// error, but field access past the row width reads as a miss rather
/// than a panic, so the worst outcome is an empty lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(usize);

impl ColumnId {
    /// Create a column handle from a zero-based position
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position of the column
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered column names for one reference table.
///
/// Column names are kept verbatim from the source header, including any
/// spelling quirks, and are looked up case-sensitively.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<String>,
    by_name: FxHashMap<String, usize>,
}

impl Schema {
    /// Build a schema from an ordered list of column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the list is empty or contains
    /// a duplicate name.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "schema must have at least one column".to_string(),
            });
        }

        let mut by_name = FxHashMap::default();
        for (idx, name) in columns.iter().enumerate() {
            if by_name.insert(name.clone(), idx).is_some() {
                return Err(Error::InvalidConfig {
                    reason: format!("duplicate column name '{name}' in schema"),
                });
            }
        }

        Ok(Self { columns, by_name })
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolve a column by name (case-sensitive, verbatim)
    pub fn column(&self, name: &str) -> Option<ColumnId> {
        self.by_name.get(name).map(|&idx| ColumnId::new(idx))
    }

    /// Resolve a column by position
    pub fn column_at(&self, index: usize) -> Option<ColumnId> {
        (index < self.columns.len()).then(|| ColumnId::new(index))
    }

    /// Name of a column, if the handle is in range
    pub fn name(&self, column: ColumnId) -> Option<&str> {
        self.columns.get(column.index()).map(String::as_str)
    }
}

/// One data row of a reference table: a flat list of string fields.
///
/// Fields are untyped and untrimmed. An empty string is a present field
/// with no value, which several engine rules treat specially (empty join
/// keys never match, empty code candidates are skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    /// Create a record from owned fields
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Create a record from anything stringly, mostly for tests and fixtures
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Field at the given column, or `None` if the row is too short
    #[inline]
    pub fn field(&self, column: ColumnId) -> Option<&str> {
        self.0.get(column.index()).map(String::as_str)
    }

    /// All fields in order
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields in this row
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no fields at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
