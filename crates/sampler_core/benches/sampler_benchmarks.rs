//! Criterion benchmarks for the scalar samplers.
//!
//! Measures single-sample throughput and the one-off cost of building the
//! ensemble spacing table for several averages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::{
    rayleigh_sample, uniform_choice, EnsembleSpacingGenerator, GaussianGenerator, SamplerRng,
};

/// Benchmark Gaussian sampling, which alternates trials and cached values.
fn bench_gaussian(c: &mut Criterion) {
    let mut rng = SamplerRng::from_seed(42);
    let mut generator = GaussianGenerator::new(0.0, 1.0).unwrap();

    c.bench_function("gaussian_sample", |b| {
        b.iter(|| black_box(generator.sample(&mut rng)));
    });
}

/// Benchmark spacing table construction and lookup across table sizes.
fn bench_spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble_spacing");

    for average in [4.0, 64.0, 1024.0] {
        group.bench_with_input(
            BenchmarkId::new("construction", average),
            &average,
            |b, &average| {
                b.iter(|| EnsembleSpacingGenerator::new(black_box(average)).unwrap());
            },
        );

        let generator = EnsembleSpacingGenerator::new(average).unwrap();
        let mut rng = SamplerRng::from_seed(7);
        group.bench_with_input(BenchmarkId::new("sample", average), &generator, |b, g| {
            b.iter(|| black_box(g.sample(&mut rng)));
        });
    }

    group.finish();
}

/// Benchmark the stateless helpers.
fn bench_stateless(c: &mut Criterion) {
    let mut rng = SamplerRng::from_seed(9);
    let items: Vec<u32> = (0..1000).collect();

    c.bench_function("rayleigh_sample", |b| {
        b.iter(|| black_box(rayleigh_sample(black_box(1.0), &mut rng).unwrap()));
    });

    c.bench_function("uniform_choice", |b| {
        b.iter(|| black_box(*uniform_choice(&items, &mut rng).unwrap()));
    });
}

criterion_group!(benches, bench_gaussian, bench_spacing, bench_stateless);
criterion_main!(benches);
