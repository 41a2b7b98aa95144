//! Spot price, swap output and slippage for an arbitrary invariant
//!
//! Spot prices are marginal rates of substitution, the ratio of the
//! invariant's partial derivatives. A zero-fee swap must leave the invariant
//! unchanged, so the output amount is the root of
//!
//! g(amount_out) = invariant(reserves + amount_in * e_in - amount_out * e_out) - invariant(reserves)
//!
//! See Angeris and Chitra (2020), https://arxiv.org/pdf/2003.10001.pdf

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{InitialGuess, SolverConfig},
    curve::Invariant,
    error::CurveError,
    math::{approx_gradient, find_root},
};

/// Pair of asset indices a price or swap query is about
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Coordinates {
    /// Asset supplied by the trader
    pub input: usize,
    /// Asset received by the trader
    pub output: usize,
}

impl Coordinates {
    /// Create a coordinate pair
    pub fn new(input: usize, output: usize) -> Self {
        Self { input, output }
    }

    /// Both indices must address `len` reserves and differ from each other
    pub fn validate(&self, len: usize) -> Result<(), CurveError> {
        if self.input >= len || self.output >= len {
            return Err(CurveError::CoordinateOutOfRange);
        }
        if self.input == self.output {
            return Err(CurveError::DegenerateCoordinates);
        }
        Ok(())
    }

    /// Same pair, trade direction reversed
    pub fn reversed(&self) -> Self {
        Self::new(self.output, self.input)
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((input, output): (usize, usize)) -> Self {
        Self::new(input, output)
    }
}

impl From<[usize; 2]> for Coordinates {
    fn from(pair: [usize; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// Swap output together with root-finder diagnostics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapOutcome {
    /// Amount of the output asset paid to the trader
    pub amount_out: f64,
    /// Invariant change left at `amount_out`
    pub residual: f64,
    /// Root-finder iterations
    pub iterations: usize,
    /// Whether the root-finder met its tolerance
    pub converged: bool,
}

/// Pricing solver with fixed numerical parameters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pricer {
    config: SolverConfig,
}

impl Pricer {
    /// Create a solver, fails on an unusable configuration
    pub fn new(config: SolverConfig) -> Result<Self, CurveError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Solver parameters
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Price of the input asset denominated in the output asset,
    /// gradient[output] / gradient[input].
    ///
    /// The sign and size are only meaningful if the invariant increases in both assets.
    pub fn spot_price<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        coordinates.validate(reserves.len())?;
        let gradient = approx_gradient(
            invariant,
            reserves,
            self.config.gradient_step,
            self.config.difference_scheme,
        );
        Ok(gradient[coordinates.output] / gradient[coordinates.input])
    }

    /// Solve for the swap output and report how the solve went
    pub fn swap_outcome<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        amount_in: f64,
        coordinates: Coordinates,
    ) -> Result<SwapOutcome, CurveError> {
        coordinates.validate(reserves.len())?;
        let initial_value = invariant.evaluate(reserves);
        let mut perturbed = reserves.to_vec();
        perturbed[coordinates.input] += amount_in;
        let invariants_difference = |amount_out: f64| {
            let mut trial = perturbed.clone();
            trial[coordinates.output] -= amount_out;
            invariant.evaluate(&trial) - initial_value
        };

        let seed = self.initial_guess(invariant, reserves, amount_in, coordinates)?;
        let root = find_root(
            invariants_difference,
            seed,
            self.config.tolerance,
            self.config.max_iterations,
        );
        if !root.converged {
            debug!(
                "swap solve did not converge: amount_in={} coordinates={:?} amount_out={} residual={} iterations={}",
                amount_in, coordinates, root.root, root.residual, root.iterations
            );
        }

        Ok(SwapOutcome {
            amount_out: root.root,
            residual: root.residual,
            iterations: root.iterations,
            converged: root.converged,
        })
    }

    /// Amount of the output asset a zero-fee trade of `amount_in` pays out.
    /// The result is not checked against the available reserve.
    pub fn swap_amount_in<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        amount_in: f64,
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        Ok(self
            .swap_outcome(invariant, reserves, amount_in, coordinates)?
            .amount_out)
    }

    /// Realized average price of the trade, amount_in / amount_out
    pub fn effective_price<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        amount_in: f64,
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        let amount_out = self.swap_amount_in(invariant, reserves, amount_in, coordinates)?;
        Ok(amount_in / amount_out)
    }

    /// Deviation of the effective price from the spot price, in percent
    pub fn slippage<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        amount_in: f64,
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        let effective_price = self.effective_price(invariant, reserves, amount_in, coordinates)?;
        let spot_price = self.spot_price(invariant, reserves, coordinates)?;
        Ok(100.0 * (effective_price / spot_price - 1.0))
    }

    fn initial_guess<I: Invariant + ?Sized>(
        &self,
        invariant: &I,
        reserves: &[f64],
        amount_in: f64,
        coordinates: Coordinates,
    ) -> Result<f64, CurveError> {
        match self.config.initial_guess {
            InitialGuess::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Ok(rng.gen::<f64>() * amount_in)
            }
            InitialGuess::SpotPrice => {
                Ok(amount_in / self.spot_price(invariant, reserves, coordinates)?)
            }
        }
    }
}

/// Spot price with the default solver parameters, see [`Pricer::spot_price`]
pub fn get_spot_price<I: Invariant + ?Sized>(
    invariant: &I,
    reserves: &[f64],
    coordinates: Coordinates,
) -> Result<f64, CurveError> {
    Pricer::default().spot_price(invariant, reserves, coordinates)
}

/// Swap output with the default solver parameters, see [`Pricer::swap_amount_in`]
pub fn swap_amount_in<I: Invariant + ?Sized>(
    invariant: &I,
    reserves: &[f64],
    amount_in: f64,
    coordinates: Coordinates,
) -> Result<f64, CurveError> {
    Pricer::default().swap_amount_in(invariant, reserves, amount_in, coordinates)
}

/// Effective price with the default solver parameters, see [`Pricer::effective_price`]
pub fn effective_price<I: Invariant + ?Sized>(
    invariant: &I,
    reserves: &[f64],
    amount_in: f64,
    coordinates: Coordinates,
) -> Result<f64, CurveError> {
    Pricer::default().effective_price(invariant, reserves, amount_in, coordinates)
}

/// Slippage in percent with the default solver parameters, see [`Pricer::slippage`]
pub fn get_slippage<I: Invariant + ?Sized>(
    invariant: &I,
    reserves: &[f64],
    amount_in: f64,
    coordinates: Coordinates,
) -> Result<f64, CurveError> {
    Pricer::default().slippage(invariant, reserves, amount_in, coordinates)
}
