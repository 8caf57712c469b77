//! Portfolio return aggregation.
//!
//! Turns a `T x N` matrix of per-asset returns and an `N`-length weight
//! vector into a single portfolio return series via a row-wise dot product.
//! Weights may be negative or exceed 1 individually; the sum-to-one
//! constraint is enforced by [`WeightVector`](crate::core::WeightVector)
//! construction.

use crate::core::{ReturnMatrix, ReturnSeries, RiskError, WeightVector};

/// Aggregates per-asset returns into portfolio returns.
///
/// A time step with any missing asset return yields a missing portfolio
/// return for that step.
///
/// # Errors
/// Returns `DimensionMismatch` when the weight count does not equal the
/// asset count.
pub fn portfolio_returns(
    matrix: &ReturnMatrix,
    weights: &WeightVector,
) -> Result<ReturnSeries, RiskError> {
    if weights.len() != matrix.n_assets() {
        return Err(RiskError::DimensionMismatch {
            expected: matrix.n_assets(),
            actual: weights.len(),
        });
    }

    let w = weights.as_slice();
    let mut values = Vec::with_capacity(matrix.n_periods());

    for t in 0..matrix.n_periods() {
        let mut acc = 0.0;
        let mut complete = true;
        for (column, &wi) in matrix.columns().iter().zip(w) {
            match column.get(t) {
                Some(r) => acc += wi * r,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        values.push(if complete { Some(acc) } else { None });
    }

    ReturnSeries::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_asset_matrix() -> ReturnMatrix {
        let a = ReturnSeries::from_observed(vec![0.01, -0.02, 0.03]).unwrap();
        let b = ReturnSeries::from_observed(vec![-0.01, 0.04, 0.01]).unwrap();
        ReturnMatrix::from_columns(vec![a, b]).unwrap()
    }

    #[test]
    fn output_length_equals_row_count() {
        let matrix = two_asset_matrix();
        let weights = WeightVector::new(vec![0.5, 0.5]).unwrap();
        let port = portfolio_returns(&matrix, &weights).unwrap();
        assert_eq!(port.len(), matrix.n_periods());
    }

    #[test]
    fn dot_product_matches_hand_computation() {
        let matrix = two_asset_matrix();
        let weights = WeightVector::new(vec![0.25, 0.75]).unwrap();
        let port = portfolio_returns(&matrix, &weights).unwrap();
        assert_relative_eq!(
            port.get(0).unwrap(),
            0.25 * 0.01 + 0.75 * (-0.01),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            port.get(1).unwrap(),
            0.25 * (-0.02) + 0.75 * 0.04,
            epsilon = 1e-15
        );
    }

    #[test]
    fn short_positions_are_allowed() {
        let matrix = two_asset_matrix();
        let weights = WeightVector::new(vec![1.5, -0.5]).unwrap();
        let port = portfolio_returns(&matrix, &weights).unwrap();
        assert_relative_eq!(
            port.get(0).unwrap(),
            1.5 * 0.01 - 0.5 * (-0.01),
            epsilon = 1e-15
        );
    }

    #[test]
    fn weight_count_mismatch_is_rejected() {
        let matrix = two_asset_matrix();
        let weights = WeightVector::new(vec![1.0]).unwrap();
        let err = portfolio_returns(&matrix, &weights).unwrap_err();
        assert_eq!(
            err,
            RiskError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn missing_asset_return_propagates_to_portfolio() {
        let a = ReturnSeries::new(vec![None, Some(0.01)]).unwrap();
        let b = ReturnSeries::from_observed(vec![0.02, 0.03]).unwrap();
        let matrix = ReturnMatrix::from_columns(vec![a, b]).unwrap();
        let weights = WeightVector::new(vec![0.5, 0.5]).unwrap();
        let port = portfolio_returns(&matrix, &weights).unwrap();
        assert_eq!(port.get(0), None);
        assert_relative_eq!(port.get(1).unwrap(), 0.02, epsilon = 1e-15);
    }
}
