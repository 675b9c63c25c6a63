//! Criterion benchmarks for sampler_core.
//!
//! Measures per-draw cost of the three samplers on the reference
//! distribution (values 1..=10, weight equal to value) and construction
//! cost as the number of values grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::{
    AliasSampler, BinarySampler, ExpansionSampler, RandomSource, WeightedSampler,
};

/// Values 1..=n with weight equal to the value.
fn generate_reference(n: u32) -> (Vec<u32>, Vec<u32>) {
    let values: Vec<u32> = (1..=n).collect();
    let weights = values.clone();
    (values, weights)
}

/// Benchmark a single draw from each sampler.
fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let (values, weights) = generate_reference(10);

    let mut alias =
        AliasSampler::with_source(&values, &weights, RandomSource::from_seed(1)).unwrap();
    group.bench_function("alias", |b| b.iter(|| black_box(alias.sample())));

    let mut expansion =
        ExpansionSampler::with_source(&values, &weights, RandomSource::from_seed(1)).unwrap();
    group.bench_function("expansion", |b| b.iter(|| black_box(expansion.sample())));

    let mut binary =
        BinarySampler::with_source(&values, &weights, RandomSource::from_seed(1)).unwrap();
    group.bench_function("binary", |b| b.iter(|| black_box(binary.sample())));

    group.finish();
}

/// Benchmark draws as the number of distinct values grows.
fn bench_draw_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_scaling");

    for size in [10_u32, 1_000, 100_000] {
        let (values, weights) = generate_reference(size);

        let mut alias =
            AliasSampler::with_source(&values, &weights, RandomSource::from_seed(2)).unwrap();
        group.bench_with_input(BenchmarkId::new("alias", size), &size, |b, _| {
            b.iter(|| black_box(alias.sample()))
        });

        let mut binary =
            BinarySampler::with_source(&values, &weights, RandomSource::from_seed(2)).unwrap();
        group.bench_with_input(BenchmarkId::new("binary", size), &size, |b, _| {
            b.iter(|| black_box(binary.sample()))
        });
    }

    group.finish();
}

/// Benchmark construction cost.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [10_u32, 100, 1_000] {
        let (values, weights) = generate_reference(size);

        group.bench_with_input(
            BenchmarkId::new("alias", size),
            &(&values, &weights),
            |b, (values, weights)| {
                b.iter(|| {
                    AliasSampler::with_source(
                        black_box(values.as_slice()),
                        black_box(weights.as_slice()),
                        RandomSource::from_seed(0),
                    )
                    .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("expansion", size),
            &(&values, &weights),
            |b, (values, weights)| {
                b.iter(|| {
                    ExpansionSampler::with_source(
                        black_box(values.as_slice()),
                        black_box(weights.as_slice()),
                        RandomSource::from_seed(0),
                    )
                    .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("binary", size),
            &(&values, &weights),
            |b, (values, weights)| {
                b.iter(|| {
                    BinarySampler::with_source(
                        black_box(values.as_slice()),
                        black_box(weights.as_slice()),
                        RandomSource::from_seed(0),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_draw, bench_draw_scaling, bench_construction);
criterion_main!(benches);
