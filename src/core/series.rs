//! Core data types for the risk engine.
//!
//! A return series is positionally time-indexed: element `t` is the log
//! return for period `t`, and `None` marks a missing value (typically the
//! first element after differencing a price series). Missing entries are
//! excluded from every statistic, and the engine never represents a missing
//! value as NaN.

use crate::core::error::RiskError;

/// Tolerance for the portfolio weight sum check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1.0e-8;

/// An ordered, time-indexed sequence of log returns for one instrument or
/// portfolio. `None` entries are missing observations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    values: Vec<Option<f64>>,
}

impl ReturnSeries {
    /// Builds a series from raw entries.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if any present value is non-finite.
    pub fn new(values: Vec<Option<f64>>) -> Result<Self, RiskError> {
        if values.iter().flatten().any(|x| !x.is_finite()) {
            return Err(RiskError::InvalidParameter(
                "return values must be finite".to_string(),
            ));
        }
        Ok(Self { values })
    }

    /// Builds a fully observed series (no missing entries).
    ///
    /// # Errors
    /// Returns `InvalidParameter` if any value is non-finite.
    pub fn from_observed(values: Vec<f64>) -> Result<Self, RiskError> {
        Self::new(values.into_iter().map(Some).collect())
    }

    /// Builds a log-return series from a price series.
    ///
    /// `r_t = ln(P_t / P_{t-1})`. The output has the same length as `prices`;
    /// the first entry is missing because differencing consumes it.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if fewer than two prices are supplied or if
    /// any price is non-finite or not strictly positive.
    pub fn from_log_prices(prices: &[f64]) -> Result<Self, RiskError> {
        let returns = crate::math::stats::log_returns(prices)?;
        let mut values = Vec::with_capacity(prices.len());
        values.push(None);
        values.extend(returns.into_iter().map(Some));
        Ok(Self { values })
    }

    /// Number of time steps, including missing entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series has no time steps at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries in time order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Entry at index `t`, or `None` when out of range or missing.
    pub fn get(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied().flatten()
    }

    /// Present observations in time order, missing entries dropped.
    pub fn observations(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }

    /// Number of present observations.
    pub fn observation_count(&self) -> usize {
        self.values.iter().flatten().count()
    }
}

/// Aligned per-asset return series: columns are assets, rows are time steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnMatrix {
    columns: Vec<ReturnSeries>,
    n_periods: usize,
}

impl ReturnMatrix {
    /// Builds a matrix from aligned asset columns.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the columns have different lengths.
    pub fn from_columns(columns: Vec<ReturnSeries>) -> Result<Self, RiskError> {
        let n_periods = columns.first().map_or(0, ReturnSeries::len);
        for col in &columns {
            if col.len() != n_periods {
                return Err(RiskError::DimensionMismatch {
                    expected: n_periods,
                    actual: col.len(),
                });
            }
        }
        Ok(Self { columns, n_periods })
    }

    /// Number of assets (columns).
    pub fn n_assets(&self) -> usize {
        self.columns.len()
    }

    /// Number of time steps (rows).
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Asset columns in order.
    pub fn columns(&self) -> &[ReturnSeries] {
        &self.columns
    }
}

/// A validated portfolio weight vector, one entry per asset.
///
/// Weights may be negative (short positions) or exceed 1 individually, but
/// must sum to 1 within [`WEIGHT_SUM_TOLERANCE`]. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    weights: Vec<f64>,
}

impl WeightVector {
    /// Validates and builds a weight vector.
    ///
    /// # Errors
    /// Returns `InvalidWeights` if any weight is non-finite or if the sum
    /// deviates from 1.0 by more than the tolerance.
    pub fn new(weights: Vec<f64>) -> Result<Self, RiskError> {
        let sum = weights.iter().sum::<f64>();
        if weights.iter().any(|w| !w.is_finite()) || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RiskError::InvalidWeights { sum });
        }
        Ok(Self { weights })
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True for an empty weight vector (never constructible via `new`, since
    /// an empty sum cannot reach 1).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights in asset order.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

/// A time-indexed series of loss-magnitude risk estimates, aligned to the
/// source return series. `None` marks indices preceding the minimum data
/// required by the estimator (for example the rolling window length).
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSeries {
    values: Vec<Option<f64>>,
}

impl RiskSeries {
    pub(crate) fn from_values(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Number of time steps, including undefined entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series has no time steps.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries in time order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Entry at index `t`, or `None` when out of range or undefined.
    pub fn get(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied().flatten()
    }

    /// Number of defined entries.
    pub fn defined_count(&self) -> usize {
        self.values.iter().flatten().count()
    }
}
