//! Error types shared across the risk engine.
//!
//! Every failure here is a precondition violation detected before any numeric
//! work starts. None of them are transient, so callers should treat them as
//! misuse rather than retry. Undefined statistical edge cases that have a
//! defined output state (for example the Kupiec boundary at zero or full
//! violations) are *not* errors; see `risk::backtest`.

use std::fmt;

/// Errors produced by the risk-measure and backtesting engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Weight count does not match the number of assets, or matrix columns
    /// have inconsistent lengths.
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
    /// Portfolio weights do not sum to 1 within tolerance, or contain
    /// non-finite values.
    InvalidWeights {
        sum: f64,
    },
    /// Empty or all-missing input, or a degenerate tail in expected
    /// shortfall.
    InsufficientData {
        required: usize,
        actual: usize,
    },
    /// A parameter is outside its valid domain (alpha, decay, window,
    /// degrees of freedom, simulation count, ...).
    InvalidParameter(String),
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidWeights { sum } => {
                write!(f, "invalid weights: sum is {sum}, must be 1.0 within 1e-8")
            }
            Self::InsufficientData { required, actual } => {
                write!(
                    f,
                    "insufficient data: need at least {required} observations, got {actual}"
                )
            }
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for RiskError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_failure() {
        let e = RiskError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(e.to_string().contains("expected 3"));

        let e = RiskError::InvalidWeights { sum: 0.9 };
        assert!(e.to_string().contains("0.9"));

        let e = RiskError::InsufficientData {
            required: 2,
            actual: 0,
        };
        assert!(e.to_string().contains("at least 2"));

        let e = RiskError::InvalidParameter("df must be > 2".to_string());
        assert!(e.to_string().contains("df must be > 2"));
    }
}
