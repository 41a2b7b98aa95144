//! Numerical routines for the pricing solver

mod gradient;
mod newton;

pub use gradient::*;
pub use newton::*;

/// Machine epsilon square root, the usual finite-difference step scale
pub const SQRT_EPSILON: f64 = 1.490_116_119_384_765_6e-8;

/// Copy of `reserves` with `delta` added at `index`
pub fn perturb(reserves: &[f64], index: usize, delta: f64) -> Vec<f64> {
    let mut perturbed = reserves.to_vec();
    perturbed[index] += delta;
    perturbed
}
