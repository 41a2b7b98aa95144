//! StableSwap curve calibrated from initial reserves

use log::debug;

use super::Invariant;
use crate::error::CurveError;

/// Number of fixed-point steps used to compute D
pub const CALIBRATION_ITERATIONS: usize = 255;

/// StableSwap invariant with its D constant computed once from the initial reserves.
///
/// The curve is
///
/// A * n^n * sum(x) + D = A * D * n^n + D^(n+1) / (n^n * prod(x))
///
/// and legitimate trades keep D unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct StableSwapCalibration {
    amplification: f64,
    n: usize,
    d: f64,
    xp: Vec<f64>,
}

impl StableSwapCalibration {
    /// Calibrate D on `initial_reserves` with amplification factor `amplification`
    pub fn new(initial_reserves: Vec<f64>, amplification: f64) -> Result<Self, CurveError> {
        if !(amplification.is_finite() && amplification > 0.0) {
            return Err(CurveError::InvalidAmplification);
        }
        if initial_reserves.len() < 2 {
            return Err(CurveError::TooFewAssets);
        }

        let n = initial_reserves.len();
        let d = compute_d(amplification, &initial_reserves);
        let curve = Self {
            amplification,
            n,
            d,
            xp: initial_reserves,
        };
        debug!(
            "StableSwap calibrated: n={} A={} D={} residual={}",
            n,
            amplification,
            d,
            curve.calibration_residual()
        );
        Ok(curve)
    }

    /// Amplification factor A
    pub fn amplification(&self) -> f64 {
        self.amplification
    }

    /// Number of assets n
    pub fn asset_count(&self) -> usize {
        self.n
    }

    /// Calibrated constant D
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Reserves the curve was calibrated on
    pub fn initial_reserves(&self) -> &[f64] {
        &self.xp
    }

    /// Signed distance of `current_balances` from the calibrated curve, zero on the curve
    pub fn get_invariant_value(&self, current_balances: &[f64]) -> f64 {
        let ann = ann(self.amplification, self.n);
        let sum: f64 = current_balances.iter().sum();
        let d_p = product_term(self.d, current_balances, self.n as f64);
        ann * sum + self.d - ann * self.d - d_p
    }

    /// Invariant value at the initial reserves, zero when the calibration converged
    pub fn calibration_residual(&self) -> f64 {
        self.get_invariant_value(&self.xp)
    }
}

impl Invariant for StableSwapCalibration {
    fn evaluate(&self, reserves: &[f64]) -> f64 {
        self.get_invariant_value(reserves)
    }
}

/// A * n^n
fn ann(amplification: f64, n: usize) -> f64 {
    amplification * (n as f64).powi(n as i32)
}

/// D^(n+1) / prod(x_i * n + 1), the +1 keeps empty reserves from dividing by zero
fn product_term(d: f64, balances: &[f64], n: f64) -> f64 {
    balances
        .iter()
        .fold(d, |d_p, x| d_p * d / (x * n + 1.0))
}

/// Fixed-point iteration for D, run for exactly CALIBRATION_ITERATIONS steps
fn compute_d(amplification: f64, xp: &[f64]) -> f64 {
    let n = xp.len() as f64;
    let sum: f64 = xp.iter().sum();
    let ann = ann(amplification, xp.len());

    let mut d = sum;
    for _ in 0..CALIBRATION_ITERATIONS {
        let d_p = product_term(d, xp, n);
        d = (ann * sum + d_p * n) * d / ((ann - 1.0) * d + (n + 1.0) * d_p);
    }
    d
}
