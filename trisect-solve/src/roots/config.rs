use crate::{bisection, sweep};

/// Configuration for a full root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Outward bracket search settings.
    pub sweep: sweep::Config,
    /// Bracket refinement settings.
    pub bisection: bisection::Config,
    /// Function-value magnitude below which a probe point is accepted as a
    /// root directly, with no bisection.
    ///
    /// This is deliberately a separate knob from
    /// [`bisection::Config::residual_tol`]: one decides whether a critical
    /// point already sits on the axis, the other when bisection has
    /// converged. [`Config::from_step_and_tolerance`] feeds both from a
    /// single value for callers that do not need the distinction.
    pub zero_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep: sweep::Config::default(),
            bisection: bisection::Config::default(),
            zero_tol: 1e-9,
        }
    }
}

impl Config {
    /// Builds a config from a step size and a single tolerance applied both
    /// to the root acceptance test and to bisection convergence.
    #[must_use]
    pub fn from_step_and_tolerance(step: f64, tolerance: f64) -> Self {
        Self {
            sweep: sweep::Config {
                step,
                ..sweep::Config::default()
            },
            bisection: bisection::Config {
                residual_tol: tolerance,
                ..bisection::Config::default()
            },
            zero_tol: tolerance,
        }
    }
}
