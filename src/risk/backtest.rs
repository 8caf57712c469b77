//! VaR backtesting: violation counting, the Kupiec proportion-of-failures
//! test, and the Christoffersen independence/conditional-coverage tests.
//!
//! Convention: a violation is a realized return more negative than the
//! negated VaR estimate for that period (`r < -VaR`).
//!
//! The Kupiec likelihood ratio is mathematically undefined when the
//! violation count is 0 or equals the sample size (a log of zero or a
//! degenerate ratio). That boundary is reported as a *forced rejection*
//! (LR = +inf, p-value 0.0, reject = true) rather than a numeric error: the
//! model sits at a calibration extreme either way. This is a caller-visible
//! simplification, not a rigorous statistical result; the LR is undefined
//! there, not necessarily indicative of rejection.
//!
//! References:
//! - Kupiec (1995), unconditional coverage test.
//! - Christoffersen (1998), independence and conditional-coverage tests.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::core::{ReturnSeries, RiskError, RiskSeries};
use crate::risk::validate_alpha;

/// Significance level at which a model is flagged for rejection.
pub const REJECTION_LEVEL: f64 = 0.05;

/// Kupiec proportion-of-failures test output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KupiecTestResult {
    /// Number of observed VaR violations.
    pub violations: usize,
    /// Expected violations under correct calibration (`n * alpha`).
    pub expected_violations: f64,
    /// Likelihood-ratio statistic, chi-squared with 1 df under the null.
    /// `+inf` at the forced-rejection boundary.
    pub lr_statistic: f64,
    /// p-value; 0.0 at the forced-rejection boundary.
    pub p_value: f64,
    /// True when the p-value falls below [`REJECTION_LEVEL`].
    pub reject: bool,
}

/// Christoffersen independence/conditional-coverage test output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChristoffersenTestResult {
    /// Number of `0 -> 0` transitions in the violation sequence.
    pub n00: usize,
    /// Number of `0 -> 1` transitions.
    pub n01: usize,
    /// Number of `1 -> 0` transitions.
    pub n10: usize,
    /// Number of `1 -> 1` transitions.
    pub n11: usize,
    /// Independence LR statistic, chi-squared with 1 df under the null.
    pub lr_independence: f64,
    /// Conditional-coverage LR (Kupiec LR + independence LR), chi-squared
    /// with 2 df under the null.
    pub lr_conditional_coverage: f64,
    /// p-value for the independence test.
    pub p_value_independence: f64,
    /// p-value for the conditional-coverage test.
    pub p_value_conditional_coverage: f64,
}

/// Aligned backtest summary in the shape the original rolling-backtest
/// report prints: counts, expectation, and the raw violation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestSummary {
    /// Number of aligned, defined observations.
    pub observations: usize,
    /// Observed violations.
    pub violations: usize,
    /// Expected violations (`observations * alpha`).
    pub expected_violations: f64,
    /// `violations / observations`.
    pub violation_rate: f64,
}

/// Counts observations with `return < -var_value`.
pub fn count_violations(series: &ReturnSeries, var_value: f64) -> usize {
    series
        .values()
        .iter()
        .flatten()
        .filter(|r| **r < -var_value)
        .count()
}

/// Kupiec proportion-of-failures test against a scalar VaR estimate.
///
/// Null hypothesis: the true violation probability equals `alpha`. The
/// statistic is
/// `LR = -2 * [(n - x) * ln((1 - alpha) / (1 - p)) + x * ln(alpha / p)]`
/// with `p = x / n`, asymptotically chi-squared with 1 df.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `InsufficientData` when the
/// series has no observations.
pub fn kupiec_test(
    series: &ReturnSeries,
    var_value: f64,
    alpha: f64,
) -> Result<KupiecTestResult, RiskError> {
    validate_alpha(alpha)?;
    let n = series.observation_count();
    if n == 0 {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let x = count_violations(series, var_value);
    Ok(kupiec_from_counts(n, x, alpha))
}

/// Kupiec test against a time-indexed VaR series.
///
/// The return series is aligned to the risk series' defined index range:
/// only indices where both the realized return and the VaR estimate are
/// defined enter the count.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `DimensionMismatch` when
/// the two series have different lengths; `InsufficientData` when no
/// aligned observations remain.
pub fn kupiec_test_series(
    returns: &ReturnSeries,
    risk: &RiskSeries,
    alpha: f64,
) -> Result<KupiecTestResult, RiskError> {
    validate_alpha(alpha)?;
    let hits = violation_indicators(returns, risk)?;
    let n = hits.len();
    if n == 0 {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let x = hits.iter().filter(|&&h| h).count();
    Ok(kupiec_from_counts(n, x, alpha))
}

/// Christoffersen independence and conditional-coverage tests against a
/// time-indexed VaR series.
///
/// The independence LR tests whether violations cluster (a first-order
/// Markov alternative); the conditional-coverage LR adds the Kupiec
/// unconditional-coverage statistic. At the Kupiec forced-rejection
/// boundary the conditional-coverage statistic is `+inf` with p-value 0.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `DimensionMismatch` for
/// length mismatch; `InsufficientData` with fewer than two aligned
/// observations.
pub fn christoffersen_test_series(
    returns: &ReturnSeries,
    risk: &RiskSeries,
    alpha: f64,
) -> Result<ChristoffersenTestResult, RiskError> {
    validate_alpha(alpha)?;
    let hits = violation_indicators(returns, risk)?;
    if hits.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            actual: hits.len(),
        });
    }

    let mut n00 = 0usize;
    let mut n01 = 0usize;
    let mut n10 = 0usize;
    let mut n11 = 0usize;
    for t in 1..hits.len() {
        match (hits[t - 1], hits[t]) {
            (false, false) => n00 += 1,
            (false, true) => n01 += 1,
            (true, false) => n10 += 1,
            (true, true) => n11 += 1,
        }
    }

    let p01 = safe_prob(n01, n00 + n01);
    let p11 = safe_prob(n11, n10 + n11);
    let p1 = safe_prob(n01 + n11, n00 + n01 + n10 + n11);

    let ln_l0 = (n00 + n10) as f64 * (1.0 - p1).ln() + (n01 + n11) as f64 * p1.ln();
    let ln_l1 = n00 as f64 * (1.0 - p01).ln()
        + n01 as f64 * p01.ln()
        + n10 as f64 * (1.0 - p11).ln()
        + n11 as f64 * p11.ln();
    let lr_independence = (2.0 * (ln_l1 - ln_l0)).max(0.0);

    let x = hits.iter().filter(|&&h| h).count();
    let kupiec = kupiec_from_counts(hits.len(), x, alpha);
    let lr_conditional_coverage = kupiec.lr_statistic + lr_independence;

    let chi1 = ChiSquared::new(1.0).expect("valid chi-square dof");
    let chi2 = ChiSquared::new(2.0).expect("valid chi-square dof");

    let p_value_conditional_coverage = if lr_conditional_coverage.is_finite() {
        1.0 - chi2.cdf(lr_conditional_coverage)
    } else {
        0.0
    };

    Ok(ChristoffersenTestResult {
        n00,
        n01,
        n10,
        n11,
        lr_independence,
        lr_conditional_coverage,
        p_value_independence: 1.0 - chi1.cdf(lr_independence),
        p_value_conditional_coverage,
    })
}

/// Aligned violation-rate summary against a time-indexed VaR series.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `DimensionMismatch` for
/// length mismatch; `InsufficientData` when no aligned observations remain.
pub fn backtest_summary(
    returns: &ReturnSeries,
    risk: &RiskSeries,
    alpha: f64,
) -> Result<BacktestSummary, RiskError> {
    validate_alpha(alpha)?;
    let hits = violation_indicators(returns, risk)?;
    let n = hits.len();
    if n == 0 {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let x = hits.iter().filter(|&&h| h).count();
    Ok(BacktestSummary {
        observations: n,
        violations: x,
        expected_violations: n as f64 * alpha,
        violation_rate: x as f64 / n as f64,
    })
}

/// Builds the aligned violation-indicator sequence: one entry per index
/// where both the realized return and the VaR estimate are defined, true
/// when `r < -VaR`.
///
/// # Errors
/// `DimensionMismatch` when the series lengths differ.
pub fn violation_indicators(
    returns: &ReturnSeries,
    risk: &RiskSeries,
) -> Result<Vec<bool>, RiskError> {
    if returns.len() != risk.len() {
        return Err(RiskError::DimensionMismatch {
            expected: returns.len(),
            actual: risk.len(),
        });
    }
    Ok(returns
        .values()
        .iter()
        .zip(risk.values())
        .filter_map(|(r, v)| match (r, v) {
            (Some(r), Some(v)) => Some(*r < -*v),
            _ => None,
        })
        .collect())
}

fn kupiec_from_counts(n: usize, x: usize, alpha: f64) -> KupiecTestResult {
    let expected_violations = n as f64 * alpha;

    // LR undefined at the boundary: report a forced rejection instead of a
    // numeric error.
    if x == 0 || x == n {
        return KupiecTestResult {
            violations: x,
            expected_violations,
            lr_statistic: f64::INFINITY,
            p_value: 0.0,
            reject: true,
        };
    }

    let p_hat = x as f64 / n as f64;
    let lr = (-2.0
        * ((n - x) as f64 * ((1.0 - alpha) / (1.0 - p_hat)).ln()
            + x as f64 * (alpha / p_hat).ln()))
    .max(0.0);

    let chi = ChiSquared::new(1.0).expect("valid chi-square dof");
    let p_value = 1.0 - chi.cdf(lr);

    KupiecTestResult {
        violations: x,
        expected_violations,
        lr_statistic: lr,
        p_value,
        reject: p_value < REJECTION_LEVEL,
    }
}

fn safe_prob(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.5
    } else {
        (num as f64 / den as f64).clamp(1.0e-12, 1.0 - 1.0e-12)
    }
}
