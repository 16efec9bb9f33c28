//! Criterion benchmarks for the forecasting hot paths.
//!
//! Benchmarks:
//! 1. Least-squares trend fit over growing series
//! 2. Full trend + seasonal forecast (fit + projection)
//! 3. Naive drift baseline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trendcast_core::sample::SampleSeries;
use trendcast_core::trend::LinearTrend;
use trendcast_core::{Forecaster, NaiveDrift, SeasonalPeriod, TrendSeasonal};

fn make_series(len: usize) -> Vec<f64> {
    SampleSeries {
        len,
        period: SeasonalPeriod::new(12).unwrap(),
        ..SampleSeries::default()
    }
    .generate()
    .unwrap()
}

fn bench_trend_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_fit");
    for len in [100, 1_000, 10_000] {
        let series = make_series(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, s| {
            b.iter(|| LinearTrend::fit(black_box(s)).unwrap())
        });
    }
    group.finish();
}

fn bench_trend_seasonal(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_seasonal");
    let period = SeasonalPeriod::new(12).unwrap();
    for len in [100, 1_000, 10_000] {
        let series = make_series(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, s| {
            b.iter(|| TrendSeasonal.run(black_box(s), 24, period).unwrap())
        });
    }
    group.finish();
}

fn bench_naive_drift(c: &mut Criterion) {
    let series = make_series(10_000);
    c.bench_function("naive_drift_10k", |b| {
        b.iter(|| {
            NaiveDrift
                .forecast(black_box(&series), 24, SeasonalPeriod::DEFAULT)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_trend_fit,
    bench_trend_seasonal,
    bench_naive_drift
);
criterion_main!(benches);
