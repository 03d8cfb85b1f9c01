use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kde_core::DensityEstimator;
use kde_estimator::{BandwidthMethod, EstimatorBuilder};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("KernelDensityEstimator");
    let sizes = [100, 1000, 5000];

    let silverman = EstimatorBuilder::new().build().unwrap();
    let scott = EstimatorBuilder::new()
        .bandwidth(BandwidthMethod::Scott)
        .build()
        .unwrap();
    let bounded = EstimatorBuilder::new().bound_correction(true).build().unwrap();
    let adaptive = EstimatorBuilder::new().adaptive(true).build().unwrap();

    for &size in &sizes {
        let data = generate_normal_data(size, 42);

        group.bench_with_input(BenchmarkId::new("silverman", size), &data, |b, data| {
            b.iter(|| silverman.estimate(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("scott", size), &data, |b, data| {
            b.iter(|| scott.estimate(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("bounded", size), &data, |b, data| {
            b.iter(|| bounded.estimate(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("adaptive", size), &data, |b, data| {
            b.iter(|| adaptive.estimate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
