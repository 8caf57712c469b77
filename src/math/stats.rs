//! Sample statistics and return transforms.
//!
//! The quantile definition matches linear interpolation between order
//! statistics (numpy's default `quantile`), because downstream VaR results
//! are compared against fixed expectations in backtests.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::RiskError;

/// Arithmetic mean of a non-empty sample.
///
/// # Panics
/// Panics on an empty slice; callers validate before numeric work starts.
pub fn sample_mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "values must not be empty");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// # Panics
/// Panics with fewer than 2 observations.
pub fn sample_variance(values: &[f64]) -> f64 {
    assert!(values.len() >= 2, "at least 2 observations are required");
    let mean = sample_mean(values);
    let mut sum = 0.0;
    for &x in values {
        let d = x - mean;
        sum += d * d;
    }
    sum / (values.len() as f64 - 1.0)
}

/// Unbiased sample standard deviation.
///
/// # Panics
/// Panics with fewer than 2 observations.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).max(0.0).sqrt()
}

/// Empirical `p`-quantile with linear interpolation between order statistics.
///
/// With sorted sample `x_0 <= ... <= x_{n-1}`, the quantile sits at rank
/// `p * (n - 1)` and interpolates linearly between the bracketing order
/// statistics.
///
/// # Panics
/// Panics on an empty sample or `p` outside `[0, 1]`.
pub fn empirical_quantile(values: &[f64], p: f64) -> f64 {
    assert!(!values.is_empty(), "values must not be empty");
    assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p * (sorted.len() as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        sorted[lo] + w * (sorted[hi] - sorted[lo])
    }
}

/// Standard-normal inverse CDF at tail probability `p`.
///
/// # Panics
/// Panics for `p` outside the open interval `(0, 1)`.
pub fn standard_normal_quantile(p: f64) -> f64 {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1)");
    let normal = Normal::new(0.0, 1.0).expect("valid standard normal");
    normal.inverse_cdf(p)
}

/// Simple returns from a price series: `r_t = P_t / P_{t-1} - 1`.
///
/// # Errors
/// Returns `InvalidParameter` for fewer than two prices or for any price
/// that is non-finite or not strictly positive.
pub fn simple_returns(prices: &[f64]) -> Result<Vec<f64>, RiskError> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// Log returns from a price series: `r_t = ln(P_t / P_{t-1})`.
///
/// # Errors
/// Returns `InvalidParameter` for fewer than two prices or for any price
/// that is non-finite or not strictly positive.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, RiskError> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

fn validate_prices(prices: &[f64]) -> Result<(), RiskError> {
    if prices.len() < 2 {
        return Err(RiskError::InvalidParameter(
            "prices must contain at least two values".to_string(),
        ));
    }
    if prices.iter().any(|x| !x.is_finite() || *x <= 0.0) {
        return Err(RiskError::InvalidParameter(
            "prices must be finite and strictly positive".to_string(),
        ));
    }
    Ok(())
}
