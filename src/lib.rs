#![deny(missing_docs)]

//! AMM invariant curves and a generic numerical pricing solver.
//!
//! Invariants are scalar functions of pool reserves that a zero-fee trade
//! keeps constant. The solver works with any [`curve::Invariant`]: it reads
//! spot prices off a finite-difference gradient and solves the implicit
//! trade equation with a Newton root-finder.

pub mod config;
pub mod curve;
pub mod error;
pub mod math;
pub mod pricing;

pub use config::{DifferenceScheme, InitialGuess, SolverConfig};
pub use curve::Invariant;
pub use error::CurveError;
pub use pricing::{
    effective_price, get_slippage, get_spot_price, swap_amount_in, Coordinates, Pricer,
    SwapOutcome,
};
