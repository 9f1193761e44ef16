//! Estimator and catalog benchmarks.
//!
//! Run with: `cargo bench --package skein-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use skein_bench::{raw_grid, request_grid, seeded_catalog};
use skein_lib::prelude::*;
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = YarnEstimator::default();
    let requests = request_grid();
    let raw = raw_grid();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(requests.len() as u64));

    group.bench_function("typed", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(estimator.estimate(black_box(request)).ok());
            }
        });
    });

    group.bench_function("parse_and_estimate", |b| {
        b.iter(|| {
            for (pattern_type, size, yarn_weight, gauge) in &raw {
                black_box(
                    estimator
                        .estimate_str(pattern_type, size, yarn_weight, Some(*gauge))
                        .ok(),
                );
            }
        });
    });

    group.finish();
}

fn catalog_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("catalog");

    for count in [100, 10_000] {
        let catalog = runtime
            .block_on(seeded_catalog(count))
            .expect("seeded catalog");
        let filter = PatternFilter {
            difficulty: Some(skein_lib::Difficulty::Beginner),
            category: None,
        };

        group.bench_with_input(BenchmarkId::new("list_patterns", count), &catalog, |b, catalog| {
            b.iter(|| {
                runtime.block_on(catalog.list_patterns(black_box(filter), Page::default()))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark, catalog_benchmark);
criterion_main!(benches);
