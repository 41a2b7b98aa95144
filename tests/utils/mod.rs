#![allow(dead_code)]

use amm_curves::curve::{ModifiedStableSwap, StableSwapCalibration, WeightedProduct, WeightedSum};

pub const BALANCED_RESERVES: [f64; 2] = [100.0, 100.0];

pub const THREE_POOL_RESERVES: [f64; 3] = [1_000.0, 2_500.0, 400.0];

pub fn balanced_product() -> WeightedProduct {
    WeightedProduct::new(vec![0.5, 0.5]).unwrap()
}

pub fn three_pool_product() -> WeightedProduct {
    WeightedProduct::new(vec![0.2, 0.3, 0.5]).unwrap()
}

pub fn three_pool_sum() -> WeightedSum {
    WeightedSum::new(vec![1.0, 0.5, 2.0])
}

pub fn three_pool_mixed() -> ModifiedStableSwap {
    ModifiedStableSwap::new(vec![1.0, 1.0, 1.0], vec![0.2, 0.3, 0.5], 0.5).unwrap()
}

pub fn stable_pool() -> StableSwapCalibration {
    StableSwapCalibration::new(BALANCED_RESERVES.to_vec(), 100.0).unwrap()
}

/// Reserves after `amount_in` enters at `input` and `amount_out` leaves at `output`
pub fn after_trade(
    reserves: &[f64],
    input: usize,
    output: usize,
    amount_in: f64,
    amount_out: f64,
) -> Vec<f64> {
    let mut after = reserves.to_vec();
    after[input] += amount_in;
    after[output] -= amount_out;
    after
}

pub fn relative_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs().max(1.0)
}
