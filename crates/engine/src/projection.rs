//! Condensed per-name profiles
//!
//! A [`ResolvedEntity`] carries every column of every matching row. Most
//! consumers want a handful of fields: a code, a glottocode, coordinates,
//! countries. An [`EntityProjector`] condenses entities into
//! [`VarietyProfile`]s, driven by a [`ProjectionSpec`] of per-field
//! precedence lists, so the choice of which namespace feeds which field
//! stays in wiring rather than in code.

use crate::regions::RegionDirectory;
use isogloss_core::{AttrRef, LanguageCode, Name, RegionId, ResolvedEntity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field attribute precedence for building profiles.
///
/// Each list is tried in order; the first attribute that is present and
/// non-empty supplies the field. An empty list leaves the field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSpec {
    /// Candidates for the ISO 639-3 code
    pub iso639: Vec<AttrRef>,
    /// Candidates for the glottocode
    pub glottocode: Vec<AttrRef>,
    /// Candidates for the classification level
    pub level: Vec<AttrRef>,
    /// Candidates for the latitude
    pub latitude: Vec<AttrRef>,
    /// Candidates for the longitude
    pub longitude: Vec<AttrRef>,
    /// Candidates for the `;`-separated country list
    pub countries: Vec<AttrRef>,
}

/// The condensed view of one resolved name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarietyProfile {
    /// ISO 639-3 code, if any candidate carried one
    pub iso639: Option<LanguageCode>,
    /// Glottocode, if any candidate carried one
    pub glottocode: Option<String>,
    /// Classification level (e.g. "language", "dialect")
    pub level: Option<String>,
    /// Latitude in decimal degrees; absent when unparseable
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees; absent when unparseable
    pub longitude: Option<f64>,
    /// Regions the variety is spoken in
    pub countries: Vec<RegionId>,
}

impl VarietyProfile {
    /// Whether no field was populated at all
    pub fn is_empty(&self) -> bool {
        self.iso639.is_none()
            && self.glottocode.is_none()
            && self.level.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.countries.is_empty()
    }

    /// Render the country list as display names, falling back to the raw
    /// region id for regions the directory does not know.
    pub fn country_names<'a>(&'a self, directory: &'a RegionDirectory) -> Vec<&'a str> {
        self.countries
            .iter()
            .map(|region| {
                directory
                    .lookup(region)
                    .map(|info| info.name.as_str())
                    .unwrap_or_else(|| region.as_str())
            })
            .collect()
    }
}

/// Projects entities into profiles according to a spec.
#[derive(Debug, Clone)]
pub struct EntityProjector {
    spec: ProjectionSpec,
}

impl EntityProjector {
    /// Create a projector over the given spec
    pub fn new(spec: ProjectionSpec) -> Self {
        Self { spec }
    }

    /// Condense one entity.
    ///
    /// Coordinates pick their candidate first and parse second: a chosen
    /// value that does not parse as a number leaves the field absent
    /// rather than falling through to the next candidate.
    pub fn project(&self, entity: &ResolvedEntity) -> VarietyProfile {
        VarietyProfile {
            iso639: first_non_empty(entity, &self.spec.iso639).map(LanguageCode::new),
            glottocode: first_non_empty(entity, &self.spec.glottocode).map(str::to_string),
            level: first_non_empty(entity, &self.spec.level).map(str::to_string),
            latitude: first_non_empty(entity, &self.spec.latitude)
                .and_then(|value| value.parse::<f64>().ok()),
            longitude: first_non_empty(entity, &self.spec.longitude)
                .and_then(|value| value.parse::<f64>().ok()),
            countries: first_non_empty(entity, &self.spec.countries)
                .map(split_regions)
                .unwrap_or_default(),
        }
    }

    /// Condense every entity, keyed like the input map
    pub fn project_all(
        &self,
        entities: &BTreeMap<Name, ResolvedEntity>,
    ) -> BTreeMap<Name, VarietyProfile> {
        entities
            .iter()
            .map(|(name, entity)| (name.clone(), self.project(entity)))
            .collect()
    }
}

fn first_non_empty<'a>(entity: &'a ResolvedEntity, attrs: &[AttrRef]) -> Option<&'a str> {
    attrs
        .iter()
        .filter_map(|attr| entity.get_attr(attr))
        .find(|value| !value.is_empty())
}

fn split_regions(list: &str) -> Vec<RegionId> {
    list.split(';')
        .filter(|part| !part.is_empty())
        .map(RegionId::new)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
