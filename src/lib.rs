//! Tailrisk computes quantitative risk measures for a portfolio of asset
//! return series: Value-at-Risk (VaR), Conditional VaR / Expected
//! Shortfall, and time-varying volatility-based VaR. It validates those
//! measures against realized outcomes via statistical backtesting.
//!
//! The library covers:
//! - portfolio return aggregation from an asset return matrix and a weight
//!   vector,
//! - four VaR estimation strategies (historical, parametric/Gaussian,
//!   Monte Carlo under Gaussian innovations, Monte Carlo under Student-t
//!   innovations) plus historical Expected Shortfall,
//! - time-indexed rolling historical VaR and EWMA VaR series,
//! - the Kupiec proportion-of-failures and Christoffersen
//!   independence/conditional-coverage backtests.
//!
//! Conventions:
//! - `alpha` is a tail probability in (0, 1); 0.01 means 99% VaR.
//! - Risk estimates are loss magnitudes, sign-flipped from the raw return
//!   quantile; a realized return `r` violates an estimate `v` when
//!   `r < -v`.
//! - Missing series entries are explicit (`Option`), never NaN sentinels,
//!   and are dropped from every statistic.
//! - Monte Carlo estimators are deterministic for a fixed seed; every call
//!   builds its own generator, so results never depend on call order.
//!
//! All computation is single-threaded, synchronous, and CPU-bound; the
//! engine performs no I/O.
//!
//! References:
//! - McNeil, Frey, Embrechts, *Quantitative Risk Management* (2005/2015).
//! - J.P. Morgan/Reuters, *RiskMetrics Technical Document* (1996).
//! - Kupiec (1995); Christoffersen (1998).
//!
//! # Quick Start
//! Historical VaR and Expected Shortfall of a portfolio:
//! ```rust
//! use tailrisk::core::{ReturnMatrix, ReturnSeries, WeightVector};
//! use tailrisk::risk::{historical_expected_shortfall, historical_var, portfolio_returns};
//!
//! let a = ReturnSeries::from_observed(vec![-0.05, -0.03, -0.01, 0.00, 0.02, 0.04]).unwrap();
//! let b = ReturnSeries::from_observed(vec![-0.04, -0.02, 0.00, 0.01, 0.01, 0.03]).unwrap();
//! let matrix = ReturnMatrix::from_columns(vec![a, b]).unwrap();
//! let weights = WeightVector::new(vec![0.5, 0.5]).unwrap();
//!
//! let port = portfolio_returns(&matrix, &weights).unwrap();
//! let var_80 = historical_var(&port, 0.2).unwrap();
//! let es_80 = historical_expected_shortfall(&port, 0.2).unwrap();
//! assert!(es_80 >= var_80);
//! ```
//!
//! Deterministic Monte Carlo VaR:
//! ```rust
//! use tailrisk::core::ReturnSeries;
//! use tailrisk::risk::{monte_carlo_var, McVarConfig};
//!
//! let series = ReturnSeries::from_observed(vec![0.01, -0.02, 0.015, -0.005, 0.0, 0.03]).unwrap();
//! let config = McVarConfig::new(10_000, 42);
//! let v1 = monte_carlo_var(&series, 0.05, &config).unwrap();
//! let v2 = monte_carlo_var(&series, 0.05, &config).unwrap();
//! assert_eq!(v1, v2);
//! ```
//!
//! Backtest a rolling VaR series:
//! ```rust
//! use tailrisk::core::ReturnSeries;
//! use tailrisk::risk::{kupiec_test_series, rolling_historical_var};
//!
//! let values: Vec<f64> = (0..300).map(|i| if i % 37 == 0 { -0.03 } else { 0.001 }).collect();
//! let returns = ReturnSeries::from_observed(values).unwrap();
//! let rolling = rolling_historical_var(&returns, 60, 0.05).unwrap();
//! let result = kupiec_test_series(&returns, &rolling, 0.05).unwrap();
//! assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
//! ```

pub mod core;
pub mod math;
pub mod risk;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{ReturnMatrix, ReturnSeries, RiskError, RiskSeries, WeightVector};
    pub use crate::risk::*;
}
