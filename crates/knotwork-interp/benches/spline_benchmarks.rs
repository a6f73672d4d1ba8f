//! Benchmarks for fitting and evaluating interpolators.
//!
//! Run with: cargo bench -p knotwork-interp

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use knotwork_interp::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_samples(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            t + 0.3 * (t * 0.7).sin()
        })
        .collect();
    let ys = xs.iter().map(|x| (x * 0.4).sin() + 0.05 * x).collect();
    (xs, ys)
}

fn create_grid(xs: &[f64], points: usize) -> Vec<f64> {
    let first = xs[0] - 1.0;
    let span = xs[xs.len() - 1] - xs[0] + 2.0;
    (0..points)
        .map(|k| first + span * k as f64 / points as f64)
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for n in [10, 100, 1_000, 10_000] {
        let (xs, ys) = create_samples(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("akima", n), &n, |b, _| {
            b.iter(|| AkimaSpline::fitted(black_box(&xs), black_box(&ys)));
        });
        group.bench_with_input(BenchmarkId::new("fritsch_butland", n), &n, |b, _| {
            b.iter(|| FritschButland::fitted(black_box(&xs), black_box(&ys)));
        });
        group.bench_with_input(BenchmarkId::new("natural", n), &n, |b, _| {
            b.iter(|| NaturalCubic::fitted(black_box(&xs), black_box(&ys)));
        });
        group.bench_with_input(BenchmarkId::new("not_a_knot", n), &n, |b, _| {
            b.iter(|| NotAKnotCubic::fitted(black_box(&xs), black_box(&ys)));
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");

    for n in [10, 1_000] {
        let (xs, ys) = create_samples(n);
        let grid = create_grid(&xs, 1_000);
        group.throughput(Throughput::Elements(grid.len() as u64));

        let spline = NaturalCubic::fitted(&xs, &ys).unwrap();
        group.bench_with_input(BenchmarkId::new("value", n), &grid, |b, grid| {
            b.iter(|| spline.predict_many(black_box(grid)));
        });
        group.bench_with_input(BenchmarkId::new("derivative", n), &grid, |b, grid| {
            b.iter(|| {
                grid.iter()
                    .map(|&x| spline.predict_derivative(black_box(x)))
                    .sum::<f64>()
            });
        });

        let linear = PiecewiseLinear::fitted(&xs, &ys).unwrap();
        group.bench_with_input(BenchmarkId::new("linear", n), &grid, |b, grid| {
            b.iter(|| linear.predict_many(black_box(grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);
