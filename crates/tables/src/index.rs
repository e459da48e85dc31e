//! Schema-checked in-memory tables
//!
//! A [`TableIndex`] owns one reference table: its schema and every row,
//! validated to the schema's width at load time. Queries are linear scans
//! in row order. The tables in play are reference datasets of at most a
//! few hundred thousand short rows, and scans preserve the row order that
//! the engine's last-write-wins rules are defined over, so no per-column
//! index is kept.

use isogloss_core::{ColumnId, Error, Record, Result, Schema};
use tracing::debug;

/// Outcome of a point lookup against one column.
///
/// Borrowed rows keep their table order in the ambiguous case, which is
/// what makes "apply all matches, last row wins" reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'a> {
    /// No row carries the value in that column
    Miss,
    /// Exactly one row matched
    Unique(&'a Record),
    /// Two or more rows matched, in table order
    Ambiguous(Vec<&'a Record>),
}

impl<'a> Match<'a> {
    /// All matched rows in table order, empty on a miss
    pub fn rows(&self) -> Vec<&'a Record> {
        match self {
            Self::Miss => Vec::new(),
            Self::Unique(row) => vec![row],
            Self::Ambiguous(rows) => rows.clone(),
        }
    }

    /// Number of rows behind this outcome
    pub fn count(&self) -> usize {
        match self {
            Self::Miss => 0,
            Self::Unique(_) => 1,
            Self::Ambiguous(rows) => rows.len(),
        }
    }
}

/// One loaded reference table: a name for diagnostics, a schema, and rows.
#[derive(Debug, Clone)]
pub struct TableIndex {
    name: String,
    schema: Schema,
    rows: Vec<Record>,
}

impl TableIndex {
    /// Load a table, validating every row against the schema width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] for the first row whose field count does
    /// not match the schema.
    pub fn load(name: impl Into<String>, schema: Schema, rows: Vec<Record>) -> Result<Self> {
        let name = name.into();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != schema.width() {
                return Err(Error::Schema {
                    table: name.clone(),
                    row: idx,
                    expected: schema.width(),
                    found: row.len(),
                });
            }
        }

        debug!(
            target: "isogloss::tables",
            table = %name,
            rows = rows.len(),
            columns = schema.width(),
            "table loaded"
        );

        Ok(Self { name, schema, rows })
    }

    /// Table name used in errors and logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The table's schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in table order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Resolve a column by name against this table's schema
    pub fn column(&self, name: &str) -> Option<ColumnId> {
        self.schema.column(name)
    }

    /// Resolve a column by position, failing loudly if it is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfRange`] naming this table.
    pub fn column_at(&self, index: usize) -> Result<ColumnId> {
        self.schema
            .column_at(index)
            .ok_or_else(|| Error::ColumnOutOfRange {
                table: self.name.clone(),
                index,
                width: self.schema.width(),
            })
    }

    /// Rows whose field at `column` equals `value`, lazily, in table order
    pub fn find_by_column<'a>(
        &'a self,
        column: ColumnId,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Record> {
        self.rows
            .iter()
            .filter(move |row| row.field(column) == Some(value))
    }

    /// Point lookup against one column
    pub fn lookup<'a>(&'a self, column: ColumnId, value: &'a str) -> Match<'a> {
        let mut hits = self.find_by_column(column, value);
        let first = match hits.next() {
            None => return Match::Miss,
            Some(row) => row,
        };
        match hits.next() {
            None => Match::Unique(first),
            Some(second) => {
                let mut rows = vec![first, second];
                rows.extend(hits);
                Match::Ambiguous(rows)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn geo_table() -> TableIndex {
        let schema = Schema::new(["glottocode", "name", "isocodes"]).unwrap();
        let rows = vec![
            Record::from_fields(["sout2640", "Southern Kurdish", "sdh"]),
            Record::from_fields(["kurd1259", "Kurdish", ""]),
            Record::from_fields(["cent1972", "Kurdish", "ckb"]),
        ];
        TableIndex::load("geo", schema, rows).unwrap()
    }

    #[test]
    fn test_load_accepts_matching_widths() {
        let table = geo_table();
        assert_eq!(table.name(), "geo");
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_load_rejects_short_row() {
        let schema = Schema::new(["glottocode", "name", "isocodes"]).unwrap();
        let rows = vec![
            Record::from_fields(["sout2640", "Southern Kurdish", "sdh"]),
            Record::from_fields(["kurd1259", "Kurdish"]),
        ];
        let err = TableIndex::load("geo", schema, rows).unwrap_err();
        match err {
            Error::Schema { table, row, expected, found } => {
                assert_eq!(table, "geo");
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn test_column_at_out_of_range_names_table() {
        let table = geo_table();
        assert!(table.column_at(2).is_ok());
        let err = table.column_at(3).unwrap_err();
        assert!(matches!(err, Error::ColumnOutOfRange { index: 3, width: 3, .. }));
        assert!(err.to_string().contains("geo"));
    }

    #[test]
    fn test_lookup_miss() {
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        assert_eq!(table.lookup(name_col, "Zazaki"), Match::Miss);
    }

    #[test]
    fn test_lookup_unique() {
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        match table.lookup(name_col, "Southern Kurdish") {
            Match::Unique(row) => {
                assert_eq!(row.field(table.column("isocodes").unwrap()), Some("sdh"));
            }
            other => panic!("expected unique match, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_ambiguous_keeps_table_order() {
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        let iso_col = table.column("isocodes").unwrap();
        match table.lookup(name_col, "Kurdish") {
            Match::Ambiguous(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].field(iso_col), Some(""));
                assert_eq!(rows[1].field(iso_col), Some("ckb"));
            }
            other => panic!("expected ambiguous match, got {other:?}"),
        }
    }

    #[test]
    fn test_find_by_column_is_exact() {
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        assert_eq!(table.find_by_column(name_col, "kurdish").count(), 0);
        assert_eq!(table.find_by_column(name_col, "Kurdish").count(), 2);
    }

    #[test]
    fn test_match_rows_and_count() {
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        assert_eq!(table.lookup(name_col, "Zazaki").count(), 0);
        assert_eq!(table.lookup(name_col, "Southern Kurdish").count(), 1);
        assert_eq!(table.lookup(name_col, "Kurdish").rows().len(), 2);
    }

    #[test]
    fn test_lookup_accepts_runtime_keys() {
        // Keys need not be literals; matched rows borrow from the table
        // and stay usable alongside further reads.
        let table = geo_table();
        let name_col = table.column("name").unwrap();
        let key = format!("{} Kurdish", "Southern");
        let rows = table.lookup(name_col, &key).rows();
        assert_eq!(rows.len(), 1);
        let glottocode_col = table.column("glottocode").unwrap();
        assert_eq!(rows[0].field(glottocode_col), Some("sout2640"));
        assert_eq!(table.len(), 3);
    }
}
