//! Secondary lookup by language code
//!
//! The secondary table maps language codes to attested name variants with
//! their regions and usage designations. One scan serves every queried
//! code at once; a code that matches no row still yields an (empty)
//! record, so callers can tell "queried, nothing found" from "never
//! queried".

use isogloss_core::{
    ColumnId, Error, LanguageCode, Name, RegionId, Result, SecondaryRecord, UsageType,
};
use isogloss_tables::TableIndex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

/// Column wiring for the secondary table.
#[derive(Debug, Clone)]
pub struct SecondaryTableSpec {
    /// The table holding per-code name observations
    pub table: Arc<TableIndex>,
    /// Column carrying the language code
    pub code_column: ColumnId,
    /// Column carrying the region identifier
    pub region_column: ColumnId,
    /// Column carrying the usage designation
    pub usage_column: ColumnId,
    /// Column carrying the name variant
    pub name_column: ColumnId,
}

impl SecondaryTableSpec {
    fn validate(&self) -> Result<()> {
        let schema = self.table.schema();
        for column in [
            self.code_column,
            self.region_column,
            self.usage_column,
            self.name_column,
        ] {
            if schema.name(column).is_none() {
                return Err(Error::ColumnOutOfRange {
                    table: self.table.name().to_string(),
                    index: column.index(),
                    width: schema.width(),
                });
            }
        }
        Ok(())
    }
}

/// Answers "which name variants exist for these codes" queries.
#[derive(Debug, Clone)]
pub struct SecondaryLookup {
    spec: SecondaryTableSpec,
}

impl SecondaryLookup {
    /// Build a lookup over the given wiring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfRange`] if any wired column is not in
    /// the table's schema.
    pub fn new(spec: SecondaryTableSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// Collect the observations for every queried code.
    ///
    /// Every code in the query appears in the result, observed or not.
    pub fn lookup(
        &self,
        codes: &BTreeSet<LanguageCode>,
    ) -> BTreeMap<LanguageCode, SecondaryRecord> {
        let mut records: BTreeMap<LanguageCode, SecondaryRecord> = codes
            .iter()
            .map(|code| (code.clone(), SecondaryRecord::new()))
            .collect();

        let mut observations = 0usize;
        for row in self.spec.table.rows() {
            let Some(code) = row.field(self.spec.code_column) else {
                continue;
            };
            let Some(record) = records.get_mut(code) else {
                continue;
            };
            let (Some(region), Some(usage), Some(name)) = (
                row.field(self.spec.region_column),
                row.field(self.spec.usage_column),
                row.field(self.spec.name_column),
            ) else {
                continue;
            };
            record.insert_observation(
                Name::new(name),
                RegionId::new(region),
                UsageType::new(usage),
            );
            observations += 1;
        }

        debug!(
            target: "isogloss::secondary",
            codes = codes.len(),
            observations,
            "secondary lookup complete"
        );

        records
    }
}

// ============================================================================
// Tests
// ============================================================================
