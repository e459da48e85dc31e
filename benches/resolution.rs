//! Resolution benchmarks
//!
//! Three paths, measured separately:
//! - `resolve_names`: the per-name join loop against a growing reference
//!   table (the table scan dominates once a cross-ref stage is present)
//! - `secondary_lookup`: the one-pass secondary scan serving many codes
//! - `full_run`: an end-to-end two-round run with discovery feedback
//!
//! All tables and seeds are built outside the timed loops, with fixed
//! shapes, so baselines stay comparable between runs.
//!
//! ```bash
//! cargo bench --bench resolution
//! cargo bench --bench resolution -- "full_run"  # specific group
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isogloss::{
    AttrRef, CodePriority, JoinStage, LanguageCode, Name, NameResolver, Record,
    ResolutionOrchestrator, ResolutionPlan, Schema, SecondaryLookup, SecondaryTableSpec,
    SourceTag, TableIndex,
};
use std::collections::BTreeSet;
use std::sync::Arc;

const SEED_NAMES: usize = 64;
const CODE_SPACE: usize = 64;

// =============================================================================
// Fixture builders - all allocation happens here, outside timed loops
// =============================================================================

fn source() -> SourceTag {
    SourceTag::new("ref")
}

fn reference_table(rows: usize) -> Arc<TableIndex> {
    let schema = Schema::new(["id", "name", "code"]).expect("static schema");
    let records = (0..rows)
        .map(|i| {
            Record::from_fields([
                format!("id{i:06}"),
                format!("variety {i:06}"),
                format!("c{:03}", i % CODE_SPACE),
            ])
        })
        .collect();
    Arc::new(TableIndex::load("ref", schema, records).expect("fixture rows match schema"))
}

fn index_table(rows: usize) -> Arc<TableIndex> {
    let schema = Schema::new(["code", "region", "usage", "name"]).expect("static schema");
    let records = (0..rows)
        .map(|i| {
            Record::from_fields([
                format!("c{:03}", i % CODE_SPACE),
                format!("R{}", i % 7),
                "L".to_string(),
                format!("variant {i:06}"),
            ])
        })
        .collect();
    Arc::new(TableIndex::load("index", schema, records).expect("fixture rows match schema"))
}

fn seed(table_rows: usize) -> BTreeSet<Name> {
    // Every seed name hits the reference table, spread across it
    (0..SEED_NAMES)
        .map(|i| Name::new(format!("variety {:06}", (i * table_rows / SEED_NAMES).min(table_rows - 1))))
        .collect()
}

fn resolver(table: Arc<TableIndex>) -> NameResolver {
    let name_column = table.column("name").expect("schema has a name column");
    NameResolver::new(vec![JoinStage::new(table, source(), name_column)])
        .expect("stage wiring is valid")
}

fn plan(ref_rows: usize, index_rows: usize) -> ResolutionPlan {
    let reference = reference_table(ref_rows);
    let index = index_table(index_rows);
    let name_column = reference.column("name").expect("schema has a name column");
    ResolutionPlan {
        stages: vec![JoinStage::new(reference, source(), name_column)],
        code_priority: CodePriority::new(vec![AttrRef::new(source(), "code")])
            .expect("one candidate"),
        secondary: SecondaryTableSpec {
            code_column: index.column("code").expect("schema has a code column"),
            region_column: index.column("region").expect("schema has a region column"),
            usage_column: index.column("usage").expect("schema has a usage column"),
            name_column: index.column("name").expect("schema has a name column"),
            table: index,
        },
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_resolve_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_names");
    group.throughput(Throughput::Elements(SEED_NAMES as u64));

    for rows in [100usize, 1_000, 10_000] {
        let resolver = resolver(reference_table(rows));
        let names = seed(rows);
        group.bench_with_input(BenchmarkId::new("seed_64", rows), &rows, |b, _| {
            b.iter(|| black_box(resolver.resolve(&names)));
        });
    }
    group.finish();
}

fn bench_secondary_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("secondary_lookup");

    for rows in [1_000usize, 10_000] {
        let table = index_table(rows);
        let lookup = SecondaryLookup::new(SecondaryTableSpec {
            code_column: table.column("code").expect("schema has a code column"),
            region_column: table.column("region").expect("schema has a region column"),
            usage_column: table.column("usage").expect("schema has a usage column"),
            name_column: table.column("name").expect("schema has a name column"),
            table,
        })
        .expect("index wiring is valid");
        let codes: BTreeSet<LanguageCode> = (0..CODE_SPACE)
            .map(|i| LanguageCode::new(format!("c{i:03}")))
            .collect();

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("codes_64", rows), &rows, |b, _| {
            b.iter(|| black_box(lookup.lookup(&codes)));
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.throughput(Throughput::Elements(SEED_NAMES as u64));

    for (ref_rows, index_rows) in [(1_000usize, 1_000usize), (10_000, 2_000)] {
        let orchestrator =
            ResolutionOrchestrator::with_defaults(plan(ref_rows, index_rows))
                .expect("plan wiring is valid");
        let names = seed(ref_rows);
        group.bench_with_input(
            BenchmarkId::new("two_rounds", ref_rows),
            &ref_rows,
            |b, _| {
                b.iter(|| black_box(orchestrator.run(names.clone())));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_names,
    bench_secondary_lookup,
    bench_full_run
);
criterion_main!(benches);
