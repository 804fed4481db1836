//! Shape-based orchestration of a full root-finding run.
//!
//! The orchestrator classifies the cubic by the critical points of its
//! derivative, decides from the function values at those points how many
//! real roots exist and on which side each lies, then delegates to
//! [`sweep`](crate::sweep) and [`bisection`](crate::bisection) for each one.

mod case;
mod config;
mod error;

pub use config::Config;
pub use error::Error;

use trisect_core::{Cubic, Shape};

use crate::{
    bisection::{self, Solution, Status},
    sweep::{self, Direction},
};

use case::ExtremaCase;

/// Finds all real roots of the cubic.
///
/// Roots are returned in discovery order, which is ascending because
/// brackets are searched left to right. Each run is self-contained and
/// deterministic: identical inputs yield identical root sets.
///
/// A critical point whose function value is already within
/// [`Config::zero_tol`] is emitted directly as a root, with no bisection
/// and an iteration count of zero.
///
/// # Errors
///
/// Returns an error if a bracket sweep exhausts its step budget, or if
/// bisection rejects a bracket or its configuration. No partial results
/// are returned.
pub fn find_roots(cubic: &Cubic, config: &Config) -> Result<Vec<Solution>, Error> {
    match cubic.shape() {
        Shape::Monotonic => {
            let value = cubic.eval(0.0);
            if value.abs() < config.zero_tol {
                return Ok(vec![exact_root(0.0, value)]);
            }

            // The single root lies on the side where f crosses back to zero.
            let direction = if value < -config.zero_tol {
                Direction::Right
            } else {
                Direction::Left
            };
            Ok(vec![bracket_and_bisect(cubic, 0.0, direction, config)?])
        }
        Shape::TwoExtrema { alpha, beta } => {
            let f_alpha = cubic.eval(alpha);
            let f_beta = cubic.eval(beta);

            match ExtremaCase::classify(f_alpha, f_beta, config.zero_tol) {
                ExtremaCase::Straddle => {
                    let left = bracket_and_bisect(cubic, alpha, Direction::Left, config)?;
                    // Sign change across [alpha, beta] is guaranteed here,
                    // so the middle root needs no sweep.
                    let middle = bisection::solve_unobserved(cubic, [alpha, beta], &config.bisection)?;
                    let right = bracket_and_bisect(cubic, beta, Direction::Right, config)?;
                    Ok(vec![left, middle, right])
                }
                ExtremaCase::MinOnAxis => {
                    let left = bracket_and_bisect(cubic, alpha, Direction::Left, config)?;
                    Ok(vec![left, exact_root(beta, f_beta)])
                }
                ExtremaCase::MaxOnAxis => {
                    let right = bracket_and_bisect(cubic, beta, Direction::Right, config)?;
                    Ok(vec![exact_root(alpha, f_alpha), right])
                }
                ExtremaCase::AboveAxis => {
                    Ok(vec![bracket_and_bisect(cubic, alpha, Direction::Left, config)?])
                }
                ExtremaCase::BelowAxis => {
                    Ok(vec![bracket_and_bisect(cubic, beta, Direction::Right, config)?])
                }
            }
        }
    }
}

/// Sweeps outward from the seed for a bracket, then refines it.
fn bracket_and_bisect(
    cubic: &Cubic,
    seed: f64,
    direction: Direction,
    config: &Config,
) -> Result<Solution, Error> {
    let bracket = sweep::find_bracket(cubic, seed, direction, &config.sweep)?;
    Ok(bisection::solve_unobserved(cubic, bracket, &config.bisection)?)
}

/// A root read directly off a function value within tolerance.
fn exact_root(x: f64, residual: f64) -> Solution {
    Solution::new(Status::Converged, x, residual, 0)
}
