//! Scalar Value-at-Risk and Expected-Shortfall estimators.
//!
//! All estimators use a loss-positive convention: the returned estimate is
//! the negated tail quantile of the return distribution, so a realized
//! return `r` violates the estimate when `r < -VaR`. The sign flip is
//! applied without clamping, so an estimate can be negative when the alpha
//! quantile of returns is itself a gain.
//!
//! Missing entries are dropped before any statistic; an empty cleaned
//! series is a precondition failure, never a NaN.
//!
//! References:
//! - McNeil, Frey, Embrechts, *Quantitative Risk Management* (2005/2015),
//!   VaR/ES theory.
//! - J.P. Morgan/Reuters, *RiskMetrics Technical Document* (1996),
//!   delta-normal practice.

use crate::core::{ReturnSeries, RiskError};
use crate::math::stats::{
    empirical_quantile, sample_mean, sample_std_dev, standard_normal_quantile,
};
use crate::risk::validate_alpha;

/// Historical VaR at tail probability `alpha` (0.01 = 99% VaR).
///
/// Computes the empirical alpha-quantile of the observed returns with
/// linear interpolation between order statistics and returns its negation.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `InsufficientData` when no
/// observations are present.
///
/// # Examples
/// ```rust
/// use tailrisk::core::ReturnSeries;
/// use tailrisk::risk::historical_var;
///
/// let series =
///     ReturnSeries::from_observed(vec![-0.05, -0.03, -0.01, 0.00, 0.02, 0.04]).unwrap();
/// let var = historical_var(&series, 0.2).unwrap();
/// assert!((var - 0.03).abs() < 1e-12);
/// ```
pub fn historical_var(series: &ReturnSeries, alpha: f64) -> Result<f64, RiskError> {
    validate_alpha(alpha)?;
    let obs = series.observations();
    if obs.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(-empirical_quantile(&obs, alpha))
}

/// Parametric (Gaussian) VaR at tail probability `alpha`.
///
/// Assumes returns are normally distributed: `-(mu + z * sigma)` with
/// sample mean `mu`, unbiased sample standard deviation `sigma`, and `z`
/// the standard-normal inverse CDF at `alpha`. Fast and closed-form, but
/// biased on fat-tailed data.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `InsufficientData` with
/// fewer than two observations (sample standard deviation is undefined).
pub fn parametric_var(series: &ReturnSeries, alpha: f64) -> Result<f64, RiskError> {
    validate_alpha(alpha)?;
    let obs = series.observations();
    if obs.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            actual: obs.len(),
        });
    }
    let mu = sample_mean(&obs);
    let sigma = sample_std_dev(&obs);
    let z = standard_normal_quantile(alpha);
    Ok(-(mu + z * sigma))
}

/// Historical CVaR / Expected Shortfall at tail probability `alpha`.
///
/// Average return at or below the empirical alpha-quantile, negated: the
/// expected loss given that the loss exceeds VaR.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1); `InsufficientData` when no
/// observations are present or when the tail subset is empty (degenerate
/// inputs only); an undefined mean is reported as an error, never NaN.
pub fn historical_expected_shortfall(series: &ReturnSeries, alpha: f64) -> Result<f64, RiskError> {
    validate_alpha(alpha)?;
    let obs = series.observations();
    if obs.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let q = empirical_quantile(&obs, alpha);
    let tail: Vec<f64> = obs.iter().copied().filter(|r| *r <= q).collect();
    if tail.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(-sample_mean(&tail))
}
