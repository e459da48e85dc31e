//! Region directory
//!
//! The secondary dataset identifies regions by short codes. The region
//! table maps those codes to display names and areas; a
//! [`RegionDirectory`] loads it once and answers point lookups when
//! profiles are rendered.

use isogloss_core::{ColumnId, Error, RegionId, Result};
use isogloss_tables::TableIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Column wiring for the region table.
#[derive(Debug, Clone)]
pub struct RegionTableSpec {
    /// The table mapping region codes to names and areas
    pub table: Arc<TableIndex>,
    /// Column carrying the region code
    pub region_column: ColumnId,
    /// Column carrying the display name
    pub name_column: ColumnId,
    /// Column carrying the area
    pub area_column: ColumnId,
}

/// What the directory knows about one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Display name, e.g. "Iraq"
    pub name: String,
    /// Area the region belongs to, e.g. "Asia"
    pub area: String,
}

/// Region code to display info, loaded once from the region table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionDirectory {
    regions: BTreeMap<RegionId, RegionInfo>,
}

impl RegionDirectory {
    /// Build the directory from a wired region table.
    ///
    /// A repeated region code keeps the last row, consistent with how
    /// matches apply elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfRange`] if any wired column is not in
    /// the table's schema.
    pub fn from_table(spec: &RegionTableSpec) -> Result<Self> {
        let schema = spec.table.schema();
        for column in [spec.region_column, spec.name_column, spec.area_column] {
            if schema.name(column).is_none() {
                return Err(Error::ColumnOutOfRange {
                    table: spec.table.name().to_string(),
                    index: column.index(),
                    width: schema.width(),
                });
            }
        }

        let mut regions = BTreeMap::new();
        for row in spec.table.rows() {
            let (Some(region), Some(name), Some(area)) = (
                row.field(spec.region_column),
                row.field(spec.name_column),
                row.field(spec.area_column),
            ) else {
                continue;
            };
            regions.insert(
                RegionId::new(region),
                RegionInfo {
                    name: name.to_string(),
                    area: area.to_string(),
                },
            );
        }
        Ok(Self { regions })
    }

    /// Look up one region
    pub fn lookup(&self, region: &RegionId) -> Option<&RegionInfo> {
        self.regions.get(region)
    }

    /// Number of regions known
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over regions in code order
    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, &RegionInfo)> {
        self.regions.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
