mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use trisect_core::Cubic;

use crate::observe::Observer;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best estimate found so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// Midpoint evaluated this iteration.
    pub x: f64,
    /// Function value at the midpoint.
    pub residual: f64,
}

/// Refines a bracketed root of the cubic using the bisection method.
///
/// The bracket is re-validated before any refinement: handing this function
/// an interval without a sign change indicates a logic fault in the caller
/// and is reported as [`Error::NoSignChange`] rather than silently producing
/// a wrong answer. An endpoint whose residual magnitude is already below
/// tolerance is returned immediately with an iteration count of zero.
///
/// If the iteration budget runs out before the tolerance is met, the best
/// midpoint seen so far is returned with [`Status::MaxIters`] so the caller
/// can tell an exhausted solve from a converged one.
///
/// Observers see each iteration's midpoint and bracket state.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is degenerate or
/// contains no sign change, or an evaluation produces a non-finite value.
pub fn solve<Obs>(
    cubic: &Cubic,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut left_residual = residual_at(cubic, left)?;
    if left_residual.abs() < config.residual_tol {
        return Ok(Solution::new(Status::Converged, left, left_residual, 0));
    }

    let right_residual = residual_at(cubic, right)?;
    if right_residual.abs() < config.residual_tol {
        return Ok(Solution::new(Status::Converged, right, right_residual, 0));
    }

    if left_residual.signum() == right_residual.signum() {
        return Err(Error::NoSignChange {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let (mut best, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_residual = residual_at(cubic, mid)?;
        let is_better = mid_residual.abs() < best_residual.abs();

        let event = Event {
            iter,
            bracket: [left, right],
            x: mid,
            residual: mid_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            if is_better {
                best = mid;
                best_residual = mid_residual;
            }
            return Ok(Solution::new(
                Status::StoppedByObserver,
                best,
                best_residual,
                iter,
            ));
        }

        if mid_residual.abs() < config.residual_tol {
            return Ok(Solution::new(Status::Converged, mid, mid_residual, iter));
        }

        if is_better {
            best = mid;
            best_residual = mid_residual;
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    Ok(Solution::new(
        Status::MaxIters,
        best,
        best_residual,
        config.max_iters,
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is degenerate or
/// contains no sign change, or an evaluation produces a non-finite value.
pub fn solve_unobserved(
    cubic: &Cubic,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(cubic, bracket, config, ())
}

/// Evaluates the cubic and rejects non-finite results.
fn residual_at(cubic: &Cubic, x: f64) -> Result<f64, Error> {
    let residual = cubic.eval(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

/// Validates bracket values and returns them in normalized (left < right) order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    for value in [left, right] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    Ok((left.min(right), left.max(right)))
}
