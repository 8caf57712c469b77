//! Core types shared by every estimator: return series, portfolio weights,
//! risk series, and the engine error enum.

pub mod error;
pub mod series;

pub use error::RiskError;
pub use series::{ReturnMatrix, ReturnSeries, RiskSeries, WeightVector, WEIGHT_SUM_TOLERANCE};
