//! Error types

use num_derive::FromPrimitive;
use thiserror::Error;

/// Errors that may be returned by the curve library and the pricing solver.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum CurveError {
    /// Constant product weights must add up to one.
    #[error("Weights do not sum to one")]
    WeightsNotNormalized,
    /// Reserves and weights have different lengths.
    #[error("Reserves and weights have different lengths")]
    LengthMismatch,
    /// The amplification factor must be a positive, finite number.
    #[error("Invalid amplification factor")]
    InvalidAmplification,
    /// A StableSwap pool needs at least two assets.
    #[error("Pool has fewer than two assets")]
    TooFewAssets,
    /// A coordinate points past the end of the reserves vector.
    #[error("Coordinate out of range")]
    CoordinateOutOfRange,
    /// Input and output coordinates are the same asset.
    #[error("Input and output coordinates are identical")]
    DegenerateCoordinates,
    /// Solver parameters are out of their valid range.
    #[error("Invalid solver configuration")]
    InvalidConfig,
}

impl From<CurveError> for u32 {
    fn from(e: CurveError) -> Self {
        e as u32
    }
}
