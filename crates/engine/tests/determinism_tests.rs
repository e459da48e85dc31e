//! Property tests for determinism and termination
//!
//! Tables and seeds are drawn from a deliberately tiny alphabet so that
//! names collide, codes repeat, and discovery actually feeds back.

use isogloss_core::{AttrRef, LanguageCode, Name, Record, Schema, SourceTag};
use isogloss_engine::{
    discover_new, CodePriority, JoinStage, NameResolver, ResolutionConfig, ResolutionOrchestrator,
    ResolutionPlan, SecondaryLookup, SecondaryTableSpec,
};
use isogloss_tables::TableIndex;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

fn source() -> SourceTag {
    SourceTag::new("ref")
}

/// Short lowercase tokens; "" shows up via the explicit empty weight.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-c]{1,2}",
        1 => Just(String::new()),
    ]
}

fn ref_rows() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((token(), token()), 0..8)
}

fn index_rows() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec((token(), "[A-B]{2}", token()), 0..10)
}

fn seed_names() -> impl Strategy<Value = BTreeSet<Name>> {
    prop::collection::btree_set(token().prop_map(Name::new), 0..5)
}

fn build_plan(
    ref_rows: &[(String, String)],
    index_rows: &[(String, String, String)],
) -> ResolutionPlan {
    let ref_schema = Schema::new(["name", "code"]).unwrap();
    let ref_records = ref_rows
        .iter()
        .map(|(name, code)| Record::from_fields([name.as_str(), code.as_str()]))
        .collect();
    let ref_table = Arc::new(TableIndex::load("ref", ref_schema, ref_records).unwrap());

    let index_schema = Schema::new(["code", "region", "usage", "name"]).unwrap();
    let index_records = index_rows
        .iter()
        .map(|(code, region, name)| {
            Record::from_fields([code.as_str(), region.as_str(), "L", name.as_str()])
        })
        .collect();
    let index_table = Arc::new(TableIndex::load("index", index_schema, index_records).unwrap());

    let name_column = ref_table.column("name").unwrap();
    ResolutionPlan {
        stages: vec![JoinStage::new(ref_table, source(), name_column)],
        code_priority: CodePriority::new(vec![AttrRef::new(source(), "code")]).unwrap(),
        secondary: SecondaryTableSpec {
            code_column: index_table.column("code").unwrap(),
            region_column: index_table.column("region").unwrap(),
            usage_column: index_table.column("usage").unwrap(),
            name_column: index_table.column("name").unwrap(),
            table: index_table,
        },
    }
}

proptest! {
    /// Same seed, same tables: byte-for-byte the same output.
    #[test]
    fn prop_runs_are_identical(
        ref_rows in ref_rows(),
        index_rows in index_rows(),
        seed in seed_names(),
        max_rounds in 1usize..4,
    ) {
        let config = ResolutionConfig::default().with_max_rounds(max_rounds);
        let first = ResolutionOrchestrator::new(build_plan(&ref_rows, &index_rows), config)
            .unwrap()
            .run(seed.clone());
        let second = ResolutionOrchestrator::new(build_plan(&ref_rows, &index_rows), config)
            .unwrap()
            .run(seed);
        prop_assert_eq!(first, second);
    }

    /// The parallel resolve must agree with a sequential per-name pass.
    #[test]
    fn prop_parallel_resolve_matches_sequential(
        ref_rows in ref_rows(),
        seed in seed_names(),
    ) {
        let plan = build_plan(&ref_rows, &[]);
        let resolver = NameResolver::new(plan.stages).unwrap();

        let outcome = resolver.resolve(&seed);

        let mut sequential = BTreeMap::new();
        let mut sequential_warnings = Vec::new();
        for name in &seed {
            let (entity, mut warnings) = resolver.resolve_one(name);
            sequential.insert(name.clone(), entity);
            sequential_warnings.append(&mut warnings);
        }

        prop_assert_eq!(outcome.entities, sequential);
        prop_assert_eq!(outcome.warnings, sequential_warnings);
    }

    /// Whatever a round discovers, feeding it back discovers nothing more.
    #[test]
    fn prop_discovery_feedback_reaches_empty(
        ref_rows in ref_rows(),
        index_rows in index_rows(),
        seed in seed_names(),
    ) {
        let plan = build_plan(&ref_rows, &index_rows);
        let lookup = SecondaryLookup::new(plan.secondary).unwrap();

        let codes: BTreeSet<_> = index_rows
            .iter()
            .filter(|(code, _, _)| !code.is_empty())
            .map(|(code, _, _)| LanguageCode::new(code.clone()))
            .collect();
        let secondary = lookup.lookup(&codes);

        let mut known = seed;
        let fresh = discover_new(&known, &secondary);
        known.extend(fresh);
        prop_assert_eq!(discover_new(&known, &secondary), BTreeSet::new());
    }

    /// Every name any round resolved is present in the merged entities,
    /// and nothing else is.
    #[test]
    fn prop_merged_entities_cover_all_rounds(
        ref_rows in ref_rows(),
        index_rows in index_rows(),
        seed in seed_names(),
        max_rounds in 1usize..4,
    ) {
        let config = ResolutionConfig::default().with_max_rounds(max_rounds);
        let output = ResolutionOrchestrator::new(build_plan(&ref_rows, &index_rows), config)
            .unwrap()
            .run(seed);

        let mut resolved: BTreeSet<Name> = BTreeSet::new();
        for round in &output.rounds {
            resolved.extend(round.input_names.iter().cloned());
        }
        let merged: BTreeSet<Name> = output.entities.keys().cloned().collect();
        prop_assert_eq!(merged, resolved);
    }

    /// The round count never exceeds the bound, and a run that stops under
    /// the bound stops because discovery came up empty.
    #[test]
    fn prop_round_bound_is_respected(
        ref_rows in ref_rows(),
        index_rows in index_rows(),
        seed in seed_names(),
        max_rounds in 1usize..4,
    ) {
        let config = ResolutionConfig::default().with_max_rounds(max_rounds);
        let output = ResolutionOrchestrator::new(build_plan(&ref_rows, &index_rows), config)
            .unwrap()
            .run(seed);

        prop_assert!(output.rounds.len() <= max_rounds);
        if let Some(last) = output.rounds.last() {
            if output.rounds.len() < max_rounds {
                prop_assert!(last.discovered.is_empty());
            }
        }
    }
}
