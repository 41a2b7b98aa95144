//! Solver configuration

use crate::error::CurveError;

/// Default finite-difference step used for spot prices
pub const DEFAULT_GRADIENT_STEP: f64 = 1e-4;

/// Default relative step tolerance of the root-finder, sqrt of machine epsilon
pub const DEFAULT_TOLERANCE: f64 = 1.49012e-8;

/// Default iteration cap of the root-finder
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default seed of the initial guess generator
pub const DEFAULT_SEED: u64 = 0;

/// Finite-difference scheme for gradient approximation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DifferenceScheme {
    /// (f(x + h) - f(x)) / h
    Forward,
    /// (f(x + h) - f(x - h)) / 2h
    Central,
}

impl Default for DifferenceScheme {
    fn default() -> Self {
        DifferenceScheme::Forward
    }
}

/// Strategy for the root-finder's starting point in a swap solve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialGuess {
    /// Uniform fraction of the input amount drawn from a generator with the given seed
    Seeded(u64),
    /// Input amount divided by the spot price
    SpotPrice,
}

impl Default for InitialGuess {
    fn default() -> Self {
        InitialGuess::Seeded(DEFAULT_SEED)
    }
}

/// Numerical parameters of the pricing solver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Step size per dimension for the gradient
    pub gradient_step: f64,
    /// Gradient scheme
    pub difference_scheme: DifferenceScheme,
    /// Relative step tolerance for the root-finder
    pub tolerance: f64,
    /// Maximum number of root-finder iterations
    pub max_iterations: usize,
    /// Root-finder starting point
    pub initial_guess: InitialGuess,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gradient_step: DEFAULT_GRADIENT_STEP,
            difference_scheme: DifferenceScheme::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guess: InitialGuess::default(),
        }
    }
}

impl SolverConfig {
    /// Set the gradient step
    pub fn with_gradient_step(mut self, gradient_step: f64) -> Self {
        self.gradient_step = gradient_step;
        self
    }

    /// Set the gradient scheme
    pub fn with_difference_scheme(mut self, difference_scheme: DifferenceScheme) -> Self {
        self.difference_scheme = difference_scheme;
        self
    }

    /// Set the root-finder tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the root-finder iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the initial guess strategy
    pub fn with_initial_guess(mut self, initial_guess: InitialGuess) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.gradient_step.is_finite() && self.gradient_step > 0.0) {
            return Err(CurveError::InvalidConfig);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CurveError::InvalidConfig);
        }
        if self.max_iterations == 0 {
            return Err(CurveError::InvalidConfig);
        }
        Ok(())
    }
}
