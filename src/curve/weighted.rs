//! Weighted constant product, constant sum and their interpolation

use super::{check_lengths, check_normalized, Invariant};
use crate::{error::CurveError, pricing::Coordinates};

/// Balancer-style weighted constant product.
///
/// value = x_1^w_1 * ... * x_n^w_n
///
/// # Arguments
///
/// * x - pool reserves.
/// * w - weights, must sum to one.
///
/// # Return value
///
/// value of the invariant, or `WeightsNotNormalized` if the weights do not sum to one.
pub fn weighted_constant_product(x: &[f64], w: &[f64]) -> Result<f64, CurveError> {
    check_lengths(x, w)?;
    check_normalized(w)?;
    Ok(product(x, w))
}

/// Weighted constant sum, w_1 * x_1 + ... + w_n * x_n. Weights are unconstrained.
pub fn weighted_constant_sum(x: &[f64], w: &[f64]) -> Result<f64, CurveError> {
    check_lengths(x, w)?;
    Ok(sum(x, w))
}

/// Interpolation between a weighted constant sum and a weighted constant product.
///
/// value = (1 - alpha) * sum(weights_sum * x) + alpha * prod(x ^ weights_product)
///
/// A small alpha behaves like the constant sum, alpha close to one like the
/// constant product. Neither alpha nor the product weights are validated.
pub fn modified_stable_swap(
    x: &[f64],
    weights_sum: &[f64],
    weights_product: &[f64],
    alpha: f64,
) -> Result<f64, CurveError> {
    check_lengths(x, weights_sum)?;
    check_lengths(x, weights_product)?;
    Ok(interpolate(x, weights_sum, weights_product, alpha))
}

fn product(x: &[f64], w: &[f64]) -> f64 {
    x.iter().zip(w).map(|(x, w)| x.powf(*w)).product()
}

fn sum(x: &[f64], w: &[f64]) -> f64 {
    x.iter().zip(w).map(|(x, w)| x * w).sum()
}

fn interpolate(x: &[f64], weights_sum: &[f64], weights_product: &[f64], alpha: f64) -> f64 {
    (1.0 - alpha) * sum(x, weights_sum) + alpha * product(x, weights_product)
}

/// Weighted constant product curve with weights checked once
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedProduct {
    weights: Vec<f64>,
}

impl WeightedProduct {
    /// Create a curve, the weights must sum to one
    pub fn new(weights: Vec<f64>) -> Result<Self, CurveError> {
        check_normalized(&weights)?;
        Ok(Self { weights })
    }

    /// Curve weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Analytic spot price of `input` denominated in `output`,
    /// (w_output * x_input) / (w_input * x_output)
    pub fn spot_price(
        &self,
        reserves: &[f64],
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        check_lengths(reserves, &self.weights)?;
        coordinates.validate(reserves.len())?;
        let Coordinates { input, output } = coordinates;
        Ok((self.weights[output] * reserves[input]) / (self.weights[input] * reserves[output]))
    }
}

/// Curve objects evaluate to NaN on reserves of the wrong length
impl Invariant for WeightedProduct {
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        if reserves.len() != self.weights.len() {
            return f64::NAN;
        }
        product(reserves, &self.weights)
    }
}

/// Weighted constant sum curve
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedSum {
    weights: Vec<f64>,
}

impl WeightedSum {
    /// Create a curve
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Curve weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Invariant for WeightedSum {
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        if reserves.len() != self.weights.len() {
            return f64::NAN;
        }
        sum(reserves, &self.weights)
    }
}

/// Sum/product interpolated curve
#[derive(Clone, Debug, PartialEq)]
pub struct ModifiedStableSwap {
    weights_sum: Vec<f64>,
    weights_product: Vec<f64>,
    alpha: f64,
}

impl ModifiedStableSwap {
    /// Create a curve, both weight vectors must have the same length
    pub fn new(
        weights_sum: Vec<f64>,
        weights_product: Vec<f64>,
        alpha: f64,
    ) -> Result<Self, CurveError> {
        check_lengths(&weights_sum, &weights_product)?;
        Ok(Self {
            weights_sum,
            weights_product,
            alpha,
        })
    }

    /// Weight of the product part
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Invariant for ModifiedStableSwap {
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        if reserves.len() != self.weights_sum.len() {
            return f64::NAN;
        }
        interpolate(
            reserves,
            &self.weights_sum,
            &self.weights_product,
            self.alpha,
        )
    }
}
