//! Time-indexed VaR series: rolling historical VaR and EWMA VaR.
//!
//! Both estimators produce a [`RiskSeries`] aligned to the input index, with
//! undefined entries wherever the estimator does not yet have the data it
//! needs (the rolling window for the former, the first observation for the
//! latter).
//!
//! The EWMA recursion is a strictly sequential, state-carrying fold: each
//! output depends on every prior one, so the series must be processed in
//! index order. This is the RiskMetrics recursion
//! `sigma_t^2 = lambda * sigma_{t-1}^2 + (1 - lambda) * r_t^2`.
//!
//! References:
//! - J.P. Morgan/Reuters, *RiskMetrics Technical Document* (1996).

use crate::core::{ReturnSeries, RiskError, RiskSeries};
use crate::math::stats::{empirical_quantile, standard_normal_quantile};
use crate::risk::validate_alpha;

/// Rolling historical VaR over a trailing window of observations.
///
/// The output at index `i` is the historical VaR of the most recent
/// `window` observations strictly before `i` (the current observation is
/// excluded, making each entry a one-step-ahead forecast). Indices with
/// fewer than `window` prior observations are undefined.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1) or `window == 0`.
pub fn rolling_historical_var(
    series: &ReturnSeries,
    window: usize,
    alpha: f64,
) -> Result<RiskSeries, RiskError> {
    validate_alpha(alpha)?;
    if window == 0 {
        return Err(RiskError::InvalidParameter(
            "window must be > 0".to_string(),
        ));
    }

    let mut seen: Vec<f64> = Vec::with_capacity(series.len());
    let mut values = Vec::with_capacity(series.len());

    for entry in series.values() {
        if seen.len() < window {
            values.push(None);
        } else {
            let trailing = &seen[seen.len() - window..];
            values.push(Some(-empirical_quantile(trailing, alpha)));
        }
        if let Some(r) = entry {
            seen.push(*r);
        }
    }

    Ok(RiskSeries::from_values(values))
}

/// EWMA VaR series with decay factor `lambda`.
///
/// The variance estimate is seeded with the square of the first observed
/// return, then updated in arrival order; each defined output is
/// `-(z * sigma_t)` with `z` the standard-normal inverse CDF at `alpha`.
/// Entries before the first observation are undefined; a missing interior
/// entry yields an undefined output and leaves the variance state
/// untouched.
///
/// # Errors
/// `InvalidParameter` for alpha outside (0, 1) or lambda outside (0, 1);
/// `InsufficientData` when the series has no observations to seed the
/// recursion.
pub fn ewma_var(series: &ReturnSeries, alpha: f64, lambda: f64) -> Result<RiskSeries, RiskError> {
    validate_alpha(alpha)?;
    if !lambda.is_finite() || lambda <= 0.0 || lambda >= 1.0 {
        return Err(RiskError::InvalidParameter(format!(
            "lambda must be in (0, 1), got {lambda}"
        )));
    }
    if series.observation_count() == 0 {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let z = standard_normal_quantile(alpha);
    let mut variance: Option<f64> = None;
    let mut values = Vec::with_capacity(series.len());

    for entry in series.values() {
        match entry {
            Some(r) => {
                let v = match variance {
                    None => r * r,
                    Some(prev) => lambda * prev + (1.0 - lambda) * r * r,
                };
                variance = Some(v);
                values.push(Some(-(z * v.sqrt())));
            }
            None => values.push(None),
        }
    }

    Ok(RiskSeries::from_values(values))
}
