//! Benchmarks for the aggregation hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use zephyr_insight::services::{cycle_aggregator, version_aggregator};
use zephyr_insight::{Cycle, Execution};

fn sample_executions(count: usize) -> Vec<Execution> {
    let statuses = [Some("PASS"), Some("FAIL"), Some("BLOCKED"), None];
    (0..count)
        .map(|i| {
            Execution::new(
                i.to_string(),
                format!("Regression case {i}"),
                "verifies invalid input handling",
                statuses[i % statuses.len()],
            )
        })
        .collect()
}

fn bench_cycle_aggregate(c: &mut Criterion) {
    let executions = sample_executions(1_000);
    c.bench_function("cycle_aggregate_1k", |b| {
        b.iter(|| cycle_aggregator::aggregate(black_box(&executions)));
    });
}

fn bench_version_rollup(c: &mut Criterion) {
    c.bench_function("version_rollup_10x500", |b| {
        b.iter_batched(
            || {
                let cycles: Vec<Cycle> = (0..10)
                    .map(|i| Cycle {
                        id: i.to_string(),
                        name: format!("Cycle {i}"),
                        description: String::new(),
                    })
                    .collect();
                let executions = (0..10).map(|_| sample_executions(500)).collect();
                (cycles, executions)
            },
            |(cycles, executions)| version_aggregator::aggregate(cycles, executions),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_cycle_aggregate, bench_version_rollup);
criterion_main!(benches);
