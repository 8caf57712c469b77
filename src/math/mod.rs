//! Numerical building blocks: sample moments, empirical quantiles, return
//! transforms, and distribution-function wrappers.

pub mod stats;

pub use stats::{
    empirical_quantile, log_returns, sample_mean, sample_std_dev, sample_variance, simple_returns,
    standard_normal_quantile,
};
