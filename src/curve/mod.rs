//! Curve modules

mod stable;
mod weighted;

pub use stable::*;
pub use weighted::*;

use crate::error::CurveError;

/// Tolerance on the sum of constant product weights
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-12;

/// A scalar function of pool reserves that a zero-fee trade leaves unchanged.
///
/// The pricing solver only depends on this trait, so closures, plain functions
/// and calibrated curve objects are all accepted.
pub trait Invariant {
    /// Value of the invariant at the given reserves
    fn evaluate(&self, reserves: &[f64]) -> f64;
}

impl<F> Invariant for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        self(reserves)
    }
}

impl<'a> Invariant for dyn Fn(&[f64]) -> f64 + 'a {
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        self(reserves)
    }
}

fn check_lengths(reserves: &[f64], weights: &[f64]) -> Result<(), CurveError> {
    if reserves.len() != weights.len() {
        return Err(CurveError::LengthMismatch);
    }
    Ok(())
}

fn check_normalized(weights: &[f64]) -> Result<(), CurveError> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(CurveError::WeightsNotNormalized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_squares(reserves: &[f64]) -> f64 {
        reserves.iter().map(|x| x * x).sum()
    }

    #[test]
    fn functions_and_closures_are_invariants() {
        assert_eq!(sum_of_squares.evaluate(&[1.0, 2.0]), 5.0);

        let k = 3.0;
        let scaled = move |x: &[f64]| k * x[0] * x[1];
        assert_eq!(scaled.evaluate(&[2.0, 5.0]), 30.0);

        let boxed: Box<dyn Invariant> = Box::new(scaled);
        assert_eq!(boxed.evaluate(&[1.0, 1.0]), 3.0);

        let by_ref = &scaled;
        assert_eq!(by_ref.evaluate(&[1.0, 2.0]), 6.0);
    }

    #[test]
    fn weight_checks() {
        assert!(check_normalized(&[0.2, 0.3, 0.5]).is_ok());
        assert!(check_normalized(&[0.1, 0.2, 0.7]).is_ok());
        assert_eq!(
            check_normalized(&[0.5, 0.6]),
            Err(CurveError::WeightsNotNormalized)
        );
        assert_eq!(
            check_lengths(&[1.0], &[0.5, 0.5]),
            Err(CurveError::LengthMismatch)
        );
    }
}
