//! Error types for the resolution engine
//!
//! Errors are reserved for conditions that make a run impossible to set up:
//! malformed reference tables and invalid wiring. Data-level oddities found
//! while running (ambiguous matches, an unfinished discovery) are not errors;
//! they surface as [`crate::ResolutionWarning`] values on the output.

use thiserror::Error;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions raised while loading tables or wiring an engine
#[derive(Error, Debug)]
pub enum Error {
    /// A table row does not match its schema width
    #[error("table '{table}' row {row}: expected {expected} fields, found {found}")]
    Schema {
        /// Table the bad row belongs to
        table: String,
        /// Zero-based row index
        row: usize,
        /// Fields the schema requires
        expected: usize,
        /// Fields the row actually has
        found: usize,
    },

    /// A column position points past the end of a schema
    #[error("table '{table}': column {index} out of range (width {width})")]
    ColumnOutOfRange {
        /// Table whose schema was indexed
        table: String,
        /// Requested zero-based column position
        index: usize,
        /// Number of columns the schema has
        width: usize,
    },

    /// Engine or table configuration that cannot be run
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },
}

// ============================================================================
// Tests
// ============================================================================
