//! Reference tests for the backtest engine: Kupiec proportion-of-failures
//! behavior on fixed violation counts, and end-to-end rolling/EWMA VaR
//! backtests in the shape of the original rolling-backtest workflow.

use approx::assert_relative_eq;
use tailrisk::core::ReturnSeries;
use tailrisk::risk::{
    backtest_summary, christoffersen_test_series, count_violations, ewma_var, kupiec_test,
    kupiec_test_series, rolling_historical_var, REJECTION_LEVEL,
};

#[derive(Debug, Clone)]
struct KupiecCase {
    n: usize,
    x: usize,
    alpha: f64,
    expect_reject: bool,
}

fn kupiec_reference_cases() -> Vec<KupiecCase> {
    vec![
        // Violation rate matching alpha exactly: LR = 0, p-value 1.
        KupiecCase {
            n: 1000,
            x: 10,
            alpha: 0.01,
            expect_reject: false,
        },
        // Five-fold excess violations over a long sample.
        KupiecCase {
            n: 1000,
            x: 50,
            alpha: 0.01,
            expect_reject: true,
        },
        // Mild excess over a short window does not reject.
        KupiecCase {
            n: 250,
            x: 5,
            alpha: 0.01,
            expect_reject: false,
        },
        // Too few violations also counts against calibration.
        KupiecCase {
            n: 2000,
            x: 2,
            alpha: 0.01,
            expect_reject: true,
        },
    ]
}

/// Builds `n` returns of which exactly `x` violate a VaR of 0.02.
fn series_with_violations(n: usize, x: usize) -> ReturnSeries {
    let mut values = vec![0.001; n];
    for v in values.iter_mut().take(x) {
        *v = -0.05;
    }
    ReturnSeries::from_observed(values).unwrap()
}

#[test]
fn kupiec_reference_decisions() {
    for case in kupiec_reference_cases() {
        let series = series_with_violations(case.n, case.x);
        let res = kupiec_test(&series, 0.02, case.alpha).unwrap();
        assert_eq!(res.violations, case.x, "case {case:?}");
        assert_relative_eq!(
            res.expected_violations,
            case.n as f64 * case.alpha,
            epsilon = 1e-9
        );
        assert_eq!(res.reject, case.expect_reject, "case {case:?}");
        assert_eq!(res.reject, res.p_value < REJECTION_LEVEL);
    }
}

#[test]
fn kupiec_boundary_is_forced_rejection_not_an_error() {
    for x in [0, 400] {
        let series = series_with_violations(400, x);
        let res = kupiec_test(&series, 0.02, 0.01).unwrap();
        assert_eq!(res.p_value, 0.0);
        assert!(res.reject);
        assert!(res.lr_statistic.is_infinite());
    }
}

#[test]
fn violation_count_uses_strict_inequality() {
    let series = ReturnSeries::from_observed(vec![-0.020, -0.021, 0.0, 0.02]).unwrap();
    assert_eq!(count_violations(&series, 0.02), 1);
}

#[test]
fn rolling_var_backtest_end_to_end() {
    // Synthetic daily series with a crash every 37 days, as in the original
    // rolling-backtest workflow: 99% rolling VaR over a 60-day window.
    let values: Vec<f64> = (0..320)
        .map(|i| if i % 37 == 36 { -0.03 } else { 0.001 })
        .collect();
    let returns = ReturnSeries::from_observed(values).unwrap();

    let rolling = rolling_historical_var(&returns, 60, 0.01).unwrap();
    assert_eq!(rolling.defined_count(), 320 - 60);

    let summary = backtest_summary(&returns, &rolling, 0.01).unwrap();
    assert_eq!(summary.observations, 260);
    assert_relative_eq!(summary.expected_violations, 2.6, epsilon = 1e-9);
    assert_relative_eq!(
        summary.violation_rate,
        summary.violations as f64 / 260.0,
        epsilon = 1e-12
    );

    let kupiec = kupiec_test_series(&returns, &rolling, 0.01).unwrap();
    assert_eq!(kupiec.violations, summary.violations);

    let christoffersen = christoffersen_test_series(&returns, &rolling, 0.01).unwrap();
    assert!(christoffersen.p_value_independence.is_finite());
    assert!(christoffersen.p_value_conditional_coverage.is_finite());
}

#[test]
fn ewma_var_backtest_end_to_end() {
    let values: Vec<f64> = (0..300)
        .map(|i| {
            let base = 0.012 * (((i * 13) % 23) as f64 / 11.0 - 1.0);
            if i % 53 == 52 {
                base - 0.04
            } else {
                base
            }
        })
        .collect();
    let returns = ReturnSeries::from_observed(values).unwrap();

    let ewma = ewma_var(&returns, 0.01, 0.94).unwrap();
    assert_eq!(ewma.len(), returns.len());
    assert_eq!(ewma.defined_count(), returns.len());

    let summary = backtest_summary(&returns, &ewma, 0.01).unwrap();
    assert_eq!(summary.observations, 300);

    let kupiec = kupiec_test_series(&returns, &ewma, 0.01).unwrap();
    assert_eq!(kupiec.violations, summary.violations);
    assert!(kupiec.p_value >= 0.0 && kupiec.p_value <= 1.0);
}
