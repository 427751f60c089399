//! Criterion benchmarks for u-tour.
//!
//! Uses seeded random point clouds over a city-sized bounding box to measure
//! matrix construction, greedy construction and k-opt local search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tour::construct::greedy_construct;
use u_tour::geo::{build_distance_matrix, DistanceMetric, GeoPoint};
use u_tour::kopt::{FourOptSweep, KOptConfig, KOptRunner, Strategy};

// ===========================================================================
// Synthetic instances
// ===========================================================================

fn random_points(n: usize, seed: u64) -> Vec<GeoPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| GeoPoint::new(rng.random_range(33.4..34.0), rng.random_range(-118.2..-117.6)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");

    for &n in &[50, 200, 500] {
        let points = random_points(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, p| {
            b.iter(|| {
                let dm = build_distance_matrix(black_box(p), DistanceMetric::default()).unwrap();
                black_box(dm)
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for &n in &[50, 200, 500] {
        let dm = build_distance_matrix(&random_points(n, 42), DistanceMetric::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| {
                let result = greedy_construct(black_box(dm), 0).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_kopt(c: &mut Criterion) {
    let mut group = c.benchmark_group("kopt");
    group.sample_size(10);

    let configs = [
        ("three_then_two", KOptConfig::default()),
        ("sequential_bisection", KOptConfig::default().with_strategy(Strategy::Sequential)),
        (
            "sequential_exhaustive",
            KOptConfig::default()
                .with_strategy(Strategy::Sequential)
                .with_four_opt_sweep(FourOptSweep::Exhaustive),
        ),
    ];

    for &n in &[20, 40] {
        let dm = build_distance_matrix(&random_points(n, 7), DistanceMetric::default()).unwrap();
        let (tour, cost) = greedy_construct(&dm, 0).unwrap();
        for (name, config) in &configs {
            group.bench_with_input(
                BenchmarkId::new(*name, n),
                &(&dm, &tour, config),
                |b, (dm, tour, config)| {
                    b.iter(|| {
                        let result = KOptRunner::run(dm, (*tour).clone(), cost, black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_distance_matrix, bench_greedy, bench_kopt);
criterion_main!(benches);
