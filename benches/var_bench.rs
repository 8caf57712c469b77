use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tailrisk::core::ReturnSeries;
use tailrisk::risk::{
    historical_var, kupiec_test_series, monte_carlo_var, parametric_var, rolling_historical_var,
    student_t_monte_carlo_var, McVarConfig,
};

fn benchmark_series(n: usize) -> ReturnSeries {
    // Deterministic pseudo-random walk, no RNG needed in the fixture.
    let values: Vec<f64> = (0..n)
        .map(|i| 0.02 * (((i * 2_654_435_761) % 1_000_003) as f64 / 500_001.5 - 1.0))
        .collect();
    ReturnSeries::from_observed(values).expect("finite fixture")
}

fn bench_scalar_estimators(c: &mut Criterion) {
    let series = benchmark_series(2_520);
    let mut group = c.benchmark_group("scalar_var_2520_obs");

    group.bench_function("historical", |b| {
        b.iter(|| historical_var(black_box(&series), black_box(0.01)).unwrap())
    });
    group.bench_function("parametric", |b| {
        b.iter(|| parametric_var(black_box(&series), black_box(0.01)).unwrap())
    });
    group.finish();
}

fn bench_monte_carlo(c: &mut Criterion) {
    let series = benchmark_series(2_520);
    let mut group = c.benchmark_group("monte_carlo_var");
    group.sample_size(20);

    for n_sim in [10_000usize, 100_000] {
        let config = McVarConfig::new(n_sim, 42);
        group.bench_with_input(BenchmarkId::new("gaussian", n_sim), &config, |b, cfg| {
            b.iter(|| monte_carlo_var(black_box(&series), 0.01, cfg).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("student_t_df5", n_sim), &config, |b, cfg| {
            b.iter(|| student_t_monte_carlo_var(black_box(&series), 0.01, 5.0, cfg).unwrap())
        });
    }
    group.finish();
}

fn bench_rolling_backtest(c: &mut Criterion) {
    let series = benchmark_series(2_520);
    let mut group = c.benchmark_group("rolling_backtest");
    group.sample_size(20);

    group.bench_function("rolling_var_w250", |b| {
        b.iter(|| rolling_historical_var(black_box(&series), 250, 0.01).unwrap())
    });
    group.bench_function("rolling_var_plus_kupiec_w250", |b| {
        b.iter(|| {
            let rolling = rolling_historical_var(black_box(&series), 250, 0.01).unwrap();
            kupiec_test_series(&series, &rolling, 0.01).unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_estimators,
    bench_monte_carlo,
    bench_rolling_backtest
);
criterion_main!(benches);
