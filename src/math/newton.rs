//! Newton root-finder for scalar equations

use log::trace;

use super::SQRT_EPSILON;

/// Step halvings allowed for one Newton step, and for pulling the seed into the domain
pub const MAX_STEP_HALVINGS: usize = 30;

/// Result of a root search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootOutcome {
    /// Last iterate
    pub root: f64,
    /// f(root)
    pub residual: f64,
    /// Newton steps taken
    pub iterations: usize,
    /// Whether a stopping criterion was met before the iteration cap
    pub converged: bool,
}

/// Slope of `f` at `x` by finite differences, `fx` is f(x).
/// Falls back to a backward difference if the forward point is outside the domain.
fn slope<F: Fn(f64) -> f64>(f: &F, x: f64, fx: f64) -> f64 {
    let h = SQRT_EPSILON * x.abs().max(1.0);
    let forward = f(x + h);
    if forward.is_finite() {
        return (forward - fx) / h;
    }
    (fx - f(x - h)) / h
}

/// Find x with f(x) = 0 starting from `seed`.
///
/// Newton iteration with a finite-difference derivative. A seed outside the
/// domain of `f` is halved toward zero until `f` is finite. A trial point that
/// leaves the domain or increases |f| has its step halved. The search stops
/// on an exact zero, when the full Newton step is below `tolerance` relative
/// to x, when the slope vanishes, when no halving reduces |f|, or after
/// `max_iterations` steps. The last accepted iterate is returned in every
/// case; check `converged` to tell them apart.
pub fn find_root<F: Fn(f64) -> f64>(
    f: F,
    seed: f64,
    tolerance: f64,
    max_iterations: usize,
) -> RootOutcome {
    let mut x = seed;
    let mut fx = f(x);
    let mut seed_halvings = 0;
    while !fx.is_finite() && x.is_finite() && seed_halvings < MAX_STEP_HALVINGS {
        x *= 0.5;
        fx = f(x);
        seed_halvings += 1;
    }
    if seed_halvings > 0 {
        trace!("seed {} moved to {} after {} halvings", seed, x, seed_halvings);
    }

    let mut outcome = RootOutcome {
        root: x,
        residual: fx,
        iterations: 0,
        converged: false,
    };
    if !fx.is_finite() {
        return outcome;
    }

    for iteration in 1..=max_iterations {
        if fx == 0.0 {
            outcome.converged = true;
            break;
        }

        let df = slope(&f, x, fx);
        if df == 0.0 || !df.is_finite() {
            break;
        }

        let newton_step = fx / df;
        let mut step = newton_step;
        let mut candidate = x - step;
        let mut f_candidate = f(candidate);
        let mut halvings = 0;
        while (!f_candidate.is_finite() || f_candidate.abs() > fx.abs())
            && halvings < MAX_STEP_HALVINGS
        {
            step *= 0.5;
            candidate = x - step;
            f_candidate = f(candidate);
            halvings += 1;
        }
        if !f_candidate.is_finite() || f_candidate.abs() > fx.abs() {
            break;
        }

        x = candidate;
        fx = f_candidate;
        outcome = RootOutcome {
            root: x,
            residual: fx,
            iterations: iteration,
            converged: false,
        };
        trace!(
            "newton iteration {}: x={} f(x)={} halvings={}",
            iteration,
            x,
            fx,
            halvings
        );

        if newton_step.abs() <= tolerance * (x.abs() + tolerance) {
            outcome.converged = true;
            break;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

    #[test]
    fn square_root_of_two() {
        let outcome = find_root(|x| x * x - 2.0, 1.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS);
        assert!(outcome.converged);
        assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10);
        assert!(outcome.residual.abs() < 1e-9);
        assert!(outcome.iterations > 0);
    }

    #[test]
    fn exact_seed() {
        let outcome = find_root(|x| x - 3.0, 3.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS);
        assert!(outcome.converged);
        assert_eq!(outcome.root, 3.0);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn steps_back_into_domain() {
        // the first Newton step from 4.0 lands at a negative x, outside the domain of sqrt
        let f = |x: f64| x.sqrt() - 0.5;
        let outcome = find_root(f, 4.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS);
        assert!(outcome.converged);
        assert!((outcome.root - 0.25).abs() < 1e-9);
    }

    #[test]
    fn no_root_reports_failure() {
        let outcome = find_root(|x| x * x + 1.0, 0.5, DEFAULT_TOLERANCE, 20);
        assert!(!outcome.converged);
        assert!(outcome.residual >= 1.0);
    }

    #[test]
    fn non_finite_seed() {
        // halving toward zero never leaves the negative half line
        let outcome = find_root(|x: f64| x.ln(), -1.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS);
        assert!(!outcome.converged);
        assert!(outcome.residual.is_nan());
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn seed_pulled_into_domain() {
        let f = |x: f64| (1.0 - x).sqrt() - 0.5;
        assert!(f(40.0).is_nan());
        let outcome = find_root(f, 40.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS);
        assert!(outcome.converged);
        assert!((outcome.root - 0.75).abs() < 1e-9);
    }

    #[test]
    fn kink_without_root_is_not_converged() {
        let outcome = find_root(
            |x| (x - 0.3).abs() + 1.0,
            1.0,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        );
        assert!(!outcome.converged);
        assert!(outcome.residual >= 1.0);
        assert!(outcome.residual.is_finite());
    }
}
