//! Join-stage name resolution
//!
//! A [`NameResolver`] runs each name through an ordered list of
//! [`JoinStage`]s. Every stage matches the name against one column of its
//! table; a stage may additionally carry a [`CrossRef`] fallback key, so a
//! row can also join on an attribute resolved by an earlier stage (the
//! language-level table joins on the glottocode found at dialect level).
//!
//! Matching is strictly verbatim. Within a stage all matching rows are
//! applied in table order, so for any field the last matching row's value
//! stands; a multi-row match is reported as a warning, never an error.

use isogloss_core::{
    AttrRef, ColumnId, Error, Name, Record, ResolutionWarning, ResolvedEntity, Result, SourceTag,
};
use isogloss_tables::{Match, TableIndex};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::warn;

/// Fallback join key for a stage.
///
/// When a row does not match the name itself, it still joins if its field
/// at `column` equals the entity's attribute at `attr`. The attribute is
/// read once per stage, before the stage writes anything, and an empty
/// value never joins.
#[derive(Debug, Clone)]
pub struct CrossRef {
    /// Column of the stage's table holding the foreign key
    pub column: ColumnId,
    /// Attribute on the entity the column is compared against
    pub attr: AttrRef,
}

impl CrossRef {
    /// Create a fallback join key
    pub fn new(column: ColumnId, attr: AttrRef) -> Self {
        Self { column, attr }
    }
}

/// One join stage: a table, the namespace its attributes land under, the
/// column names are matched against, and an optional fallback key.
#[derive(Debug, Clone)]
pub struct JoinStage {
    table: Arc<TableIndex>,
    source: SourceTag,
    name_column: ColumnId,
    cross_ref: Option<CrossRef>,
}

impl JoinStage {
    /// Create a stage that joins on the name column only
    pub fn new(table: Arc<TableIndex>, source: SourceTag, name_column: ColumnId) -> Self {
        Self {
            table,
            source,
            name_column,
            cross_ref: None,
        }
    }

    /// Add a fallback join key to this stage
    pub fn with_cross_ref(mut self, cross_ref: CrossRef) -> Self {
        self.cross_ref = Some(cross_ref);
        self
    }

    /// Namespace this stage files attributes under
    pub fn source(&self) -> &SourceTag {
        &self.source
    }

    fn validate(&self) -> Result<()> {
        let schema = self.table.schema();
        if schema.name(self.name_column).is_none() {
            return Err(Error::ColumnOutOfRange {
                table: self.table.name().to_string(),
                index: self.name_column.index(),
                width: schema.width(),
            });
        }
        if let Some(cross_ref) = &self.cross_ref {
            if schema.name(cross_ref.column).is_none() {
                return Err(Error::ColumnOutOfRange {
                    table: self.table.name().to_string(),
                    index: cross_ref.column.index(),
                    width: schema.width(),
                });
            }
        }
        Ok(())
    }
}

/// Everything one resolve pass produced: an entity per input name (empty
/// entities included) and the warnings raised along the way.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    /// One entity per input name, in name order
    pub entities: BTreeMap<Name, ResolvedEntity>,
    /// Ambiguity warnings, ordered by name, then by stage
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolves names against an ordered list of join stages.
#[derive(Debug, Clone)]
pub struct NameResolver {
    stages: Vec<JoinStage>,
}

impl NameResolver {
    /// Build a resolver over the given stages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the stage list is empty, or
    /// [`Error::ColumnOutOfRange`] if any stage references a column its
    /// table does not have.
    pub fn new(stages: Vec<JoinStage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "resolver needs at least one join stage".to_string(),
            });
        }
        for stage in &stages {
            stage.validate()?;
        }
        Ok(Self { stages })
    }

    /// Resolve every name in the set.
    ///
    /// Names are processed in parallel; the outcome is identical to a
    /// sequential pass in name order, entities and warnings included.
    pub fn resolve(&self, names: &BTreeSet<Name>) -> JoinOutcome {
        let ordered: Vec<&Name> = names.iter().collect();
        let resolved: Vec<(ResolvedEntity, Vec<ResolutionWarning>)> = ordered
            .par_iter()
            .map(|name| self.resolve_one(name))
            .collect();

        let mut entities = BTreeMap::new();
        let mut warnings = Vec::new();
        for (name, (entity, mut name_warnings)) in ordered.into_iter().zip(resolved) {
            entities.insert(name.clone(), entity);
            warnings.append(&mut name_warnings);
        }
        JoinOutcome { entities, warnings }
    }

    /// Resolve a single name through all stages, in stage order.
    pub fn resolve_one(&self, name: &Name) -> (ResolvedEntity, Vec<ResolutionWarning>) {
        let mut entity = ResolvedEntity::new();
        let mut warnings = Vec::new();

        for stage in &self.stages {
            let matches = match &stage.cross_ref {
                None => apply_name_lookup(stage, name, &mut entity),
                Some(cross_ref) => apply_scan(stage, name, cross_ref, &mut entity),
            };
            if matches > 1 {
                warn!(
                    target: "isogloss::resolve",
                    name = %name,
                    source = %stage.source,
                    matches,
                    "multiple rows matched one name"
                );
                warnings.push(ResolutionWarning::AmbiguousMatch {
                    name: name.clone(),
                    source: stage.source.clone(),
                    matches,
                });
            }
        }

        (entity, warnings)
    }
}

/// Stage without a fallback key: a point lookup on the name column.
fn apply_name_lookup(stage: &JoinStage, name: &Name, entity: &mut ResolvedEntity) -> usize {
    match stage.table.lookup(stage.name_column, name.as_str()) {
        Match::Miss => 0,
        Match::Unique(row) => {
            apply_row(stage, row, entity);
            1
        }
        Match::Ambiguous(rows) => {
            let count = rows.len();
            for row in rows {
                apply_row(stage, row, entity);
            }
            count
        }
    }
}

/// Stage with a fallback key: one pass over the table, each row joining on
/// the name or, failing that, on the snapshotted cross-reference value.
fn apply_scan(
    stage: &JoinStage,
    name: &Name,
    cross_ref: &CrossRef,
    entity: &mut ResolvedEntity,
) -> usize {
    // Snapshot before the scan: rows applied by this stage must not
    // change what the rest of the scan joins on.
    let cross_val: Option<String> = entity
        .get_attr(&cross_ref.attr)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let mut matches = 0;
    for row in stage.table.rows() {
        let name_hit = row.field(stage.name_column) == Some(name.as_str());
        let cross_hit = !name_hit
            && match (&cross_val, row.field(cross_ref.column)) {
                (Some(value), Some(field)) => field == value,
                _ => false,
            };
        if name_hit || cross_hit {
            apply_row(stage, row, entity);
            matches += 1;
        }
    }
    matches
}

/// Copy every field of a matching row onto the entity under the stage's tag.
fn apply_row(stage: &JoinStage, row: &Record, entity: &mut ResolvedEntity) {
    for (column, value) in stage.table.schema().columns().iter().zip(row.fields()) {
        entity.insert(&stage.source, column, value);
    }
}

// ============================================================================
// Tests
// ============================================================================
