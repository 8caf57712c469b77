//! Portfolio risk measures and VaR backtesting.
//!
//! This module wires and re-exports:
//! - `portfolio`: asset-return aggregation into a single portfolio series,
//! - `var`: historical and parametric (Gaussian) VaR plus historical
//!   Expected Shortfall,
//! - `monte_carlo`: simulation-based VaR under Gaussian and Student-t
//!   innovations with per-call seeded RNGs,
//! - `volatility`: time-indexed rolling historical VaR and EWMA VaR,
//! - `backtest`: violation counting, the Kupiec proportion-of-failures test,
//!   and the Christoffersen independence/conditional-coverage tests.
//!
//! It is intentionally a facade: domain logic lives in submodules, while this
//! file defines the public import surface (`tailrisk::risk::*`).

pub mod backtest;
pub mod monte_carlo;
pub mod portfolio;
pub mod var;
pub mod volatility;

pub use backtest::{
    backtest_summary, christoffersen_test_series, count_violations, kupiec_test,
    kupiec_test_series, violation_indicators, BacktestSummary, ChristoffersenTestResult,
    KupiecTestResult, REJECTION_LEVEL,
};
pub use monte_carlo::{monte_carlo_var, student_t_monte_carlo_var, McVarConfig};
pub use portfolio::portfolio_returns;
pub use var::{historical_expected_shortfall, historical_var, parametric_var};
pub use volatility::{ewma_var, rolling_historical_var};

use crate::core::RiskError;

/// Validates a tail probability. Lower alpha means a rarer, more extreme
/// tail (0.01 corresponds to 99% VaR).
pub(crate) fn validate_alpha(alpha: f64) -> Result<(), RiskError> {
    if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )))
    }
}
