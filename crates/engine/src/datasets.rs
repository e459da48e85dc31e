//! Wiring for the reference datasets
//!
//! The engine itself never interprets column names; every join, selection,
//! and projection is wired positionally. This module pins that wiring down
//! for the datasets the pipeline was built around: the Glottolog geography
//! and languages exports and the Ethnologue language index and country
//! codes tables. Schemas mirror the published headers verbatim, spelling
//! quirks included.

use crate::orchestrator::ResolutionPlan;
use crate::projection::ProjectionSpec;
use crate::regions::RegionTableSpec;
use crate::resolver::{CrossRef, JoinStage};
use crate::secondary::SecondaryTableSpec;
use crate::selector::CodePriority;
use isogloss_core::Result;
use isogloss_tables::TableIndex;
use std::sync::Arc;

/// Glottolog table wiring: the dialect-level geography export and the
/// language-level languages export.
pub mod glottolog {
    use super::*;
    use isogloss_core::{AttrRef, Schema, SourceTag};

    /// Namespace for attributes from the geography table
    pub const DIALECT_GEO: &str = "dialect_geo";
    /// Namespace for attributes from the languages table
    pub const LANGUAGE: &str = "language";

    /// Tag for the geography namespace
    pub fn dialect_geo_tag() -> SourceTag {
        SourceTag::new(DIALECT_GEO)
    }

    /// Tag for the languages namespace
    pub fn language_tag() -> SourceTag {
        SourceTag::new(LANGUAGE)
    }

    /// Header of `languages_and_dialects_geo.csv`
    pub fn geo_schema() -> Result<Schema> {
        Schema::new([
            "glottocode",
            "name",
            "isocodes",
            "level",
            "macroarea",
            "latitude",
            "longitude",
        ])
    }

    /// Header of `languages.csv`.
    ///
    /// `Closest_ISO369P3code` is spelled the way the dataset spells it.
    pub fn languages_schema() -> Result<Schema> {
        Schema::new([
            "ID",
            "Name",
            "Macroarea",
            "Latitude",
            "Longitude",
            "Glottocode",
            "ISO639P3code",
            "Countries",
            "Family_ID",
            "Language_ID",
            "Closest_ISO369P3code",
            "First_Year_Of_Documentation",
            "Last_Year_Of_Documentation",
        ])
    }

    /// First join stage: match names against the geography table.
    ///
    /// # Errors
    ///
    /// Returns [`isogloss_core::Error::ColumnOutOfRange`] if the table is
    /// narrower than the geography header.
    pub fn geo_stage(table: Arc<TableIndex>) -> Result<JoinStage> {
        let name_column = table.column_at(1)?;
        Ok(JoinStage::new(table, dialect_geo_tag(), name_column))
    }

    /// Second join stage: match names against the languages table, falling
    /// back to the glottocode resolved at dialect level.
    ///
    /// # Errors
    ///
    /// Returns [`isogloss_core::Error::ColumnOutOfRange`] if the table is
    /// narrower than the languages header.
    pub fn languages_stage(table: Arc<TableIndex>) -> Result<JoinStage> {
        let name_column = table.column_at(1)?;
        let id_column = table.column_at(0)?;
        Ok(
            JoinStage::new(table, language_tag(), name_column).with_cross_ref(CrossRef::new(
                id_column,
                AttrRef::new(dialect_geo_tag(), "glottocode"),
            )),
        )
    }

    /// Code candidates in priority order: the dialect-level ISO codes, the
    /// language-level ISO 639-3 code, then the closest-match code.
    pub fn code_priority() -> Result<CodePriority> {
        CodePriority::new(vec![
            AttrRef::new(dialect_geo_tag(), "isocodes"),
            AttrRef::new(language_tag(), "ISO639P3code"),
            AttrRef::new(language_tag(), "Closest_ISO369P3code"),
        ])
    }

    /// Default profile projection over the two Glottolog namespaces.
    pub fn projection_spec() -> ProjectionSpec {
        ProjectionSpec {
            iso639: vec![
                AttrRef::new(dialect_geo_tag(), "isocodes"),
                AttrRef::new(language_tag(), "ISO639P3code"),
            ],
            glottocode: vec![
                AttrRef::new(dialect_geo_tag(), "glottocode"),
                AttrRef::new(language_tag(), "Glottocode"),
            ],
            level: vec![AttrRef::new(dialect_geo_tag(), "level")],
            latitude: vec![
                AttrRef::new(language_tag(), "Latitude"),
                AttrRef::new(dialect_geo_tag(), "latitude"),
            ],
            longitude: vec![
                AttrRef::new(language_tag(), "Longitude"),
                AttrRef::new(dialect_geo_tag(), "longitude"),
            ],
            countries: vec![AttrRef::new(language_tag(), "Countries")],
        }
    }
}

/// Ethnologue table wiring: the language index and the country codes table.
pub mod ethnologue {
    use super::*;
    use isogloss_core::Schema;

    /// Header of `LanguageIndex.tab`
    pub fn language_index_schema() -> Result<Schema> {
        Schema::new(["LangID", "CountryID", "NameType", "Name"])
    }

    /// Secondary lookup wiring over the language index.
    ///
    /// # Errors
    ///
    /// Returns [`isogloss_core::Error::ColumnOutOfRange`] if the table is
    /// narrower than the language index header.
    pub fn language_index_spec(table: Arc<TableIndex>) -> Result<SecondaryTableSpec> {
        Ok(SecondaryTableSpec {
            code_column: table.column_at(0)?,
            region_column: table.column_at(1)?,
            usage_column: table.column_at(2)?,
            name_column: table.column_at(3)?,
            table,
        })
    }

    /// Header of `CountryCodes.tab`
    pub fn country_codes_schema() -> Result<Schema> {
        Schema::new(["CountryID", "Name", "Area"])
    }

    /// Region directory wiring over the country codes table.
    ///
    /// # Errors
    ///
    /// Returns [`isogloss_core::Error::ColumnOutOfRange`] if the table is
    /// narrower than the country codes header.
    pub fn country_codes_spec(table: Arc<TableIndex>) -> Result<RegionTableSpec> {
        Ok(RegionTableSpec {
            region_column: table.column_at(0)?,
            name_column: table.column_at(1)?,
            area_column: table.column_at(2)?,
            table,
        })
    }
}

/// The reference pipeline: geography and languages join stages, Glottolog
/// code priority, Ethnologue secondary lookup.
///
/// # Errors
///
/// Returns [`isogloss_core::Error::ColumnOutOfRange`] if any table is
/// narrower than its expected header.
pub fn standard_plan(
    geo: Arc<TableIndex>,
    languages: Arc<TableIndex>,
    language_index: Arc<TableIndex>,
) -> Result<ResolutionPlan> {
    Ok(ResolutionPlan {
        stages: vec![
            glottolog::geo_stage(geo)?,
            glottolog::languages_stage(languages)?,
        ],
        code_priority: glottolog::code_priority()?,
        secondary: ethnologue::language_index_spec(language_index)?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use isogloss_core::Record;

    fn geo_table() -> Arc<TableIndex> {
        let rows = vec![Record::from_fields([
            "sout2640",
            "Southern Kurdish",
            "sdh",
            "language",
            "Eurasia",
            "34.0",
            "45.9",
        ])];
        Arc::new(TableIndex::load("geo", glottolog::geo_schema().unwrap(), rows).unwrap())
    }

    fn languages_table() -> Arc<TableIndex> {
        let rows = vec![Record::from_fields([
            "sout2640",
            "Southern Kurdish",
            "Eurasia",
            "34.907",
            "45.946",
            "sout2640",
            "sdh",
            "IQ;IR",
            "indo1319",
            "",
            "",
            "",
            "",
        ])];
        Arc::new(
            TableIndex::load("languages", glottolog::languages_schema().unwrap(), rows).unwrap(),
        )
    }

    fn index_table() -> Arc<TableIndex> {
        let rows = vec![Record::from_fields(["sdh", "IQ", "L", "Kurdish, Southern"])];
        Arc::new(
            TableIndex::load(
                "language_index",
                ethnologue::language_index_schema().unwrap(),
                rows,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_schemas_have_published_widths() {
        assert_eq!(glottolog::geo_schema().unwrap().width(), 7);
        assert_eq!(glottolog::languages_schema().unwrap().width(), 13);
        assert_eq!(ethnologue::language_index_schema().unwrap().width(), 4);
        assert_eq!(ethnologue::country_codes_schema().unwrap().width(), 3);
    }

    #[test]
    fn test_languages_schema_keeps_dataset_spelling() {
        let schema = glottolog::languages_schema().unwrap();
        assert!(schema.column("Closest_ISO369P3code").is_some());
        assert!(schema.column("Closest_ISO639P3code").is_none());
    }

    #[test]
    fn test_standard_plan_wires_up() {
        let plan = standard_plan(geo_table(), languages_table(), index_table()).unwrap();
        assert_eq!(plan.stages.len(), 2);
        assert_eq!(plan.stages[0].source(), &glottolog::dialect_geo_tag());
        assert_eq!(plan.stages[1].source(), &glottolog::language_tag());
        assert_eq!(plan.code_priority.attrs().len(), 3);
    }

    #[test]
    fn test_stage_wiring_rejects_narrow_table() {
        let schema = isogloss_core::Schema::new(["only"]).unwrap();
        let table = Arc::new(TableIndex::load("geo", schema, Vec::new()).unwrap());
        assert!(glottolog::geo_stage(table).is_err());
    }

    #[test]
    fn test_code_priority_order() {
        let priority = glottolog::code_priority().unwrap();
        let fields: Vec<&str> = priority
            .attrs()
            .iter()
            .map(|attr| attr.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec!["isocodes", "ISO639P3code", "Closest_ISO369P3code"]
        );
    }
}
