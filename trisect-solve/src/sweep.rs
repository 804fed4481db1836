//! Outward fixed-step search for a sign-change bracket.
//!
//! Given a seed point and a direction, the sweep probes the cubic at fixed
//! offsets from the seed until two consecutive evaluations change sign.
//! The enclosing pair becomes the bracket that [`bisection`](crate::bisection)
//! refines. Failure to find a sign change within the step budget is fatal
//! for the run: it means the step is too coarse or there is no root on that
//! side within range.

use std::fmt;

use thiserror::Error;

use trisect_core::Cubic;

/// Direction of the outward sweep relative to the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Probe at `seed − i·step`.
    Left,
    /// Probe at `seed + i·step`.
    Right,
}

impl Direction {
    fn signum(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Configuration for the outward sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Distance between consecutive probe points.
    pub step: f64,
    /// Maximum number of steps taken away from the seed.
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 0.01,
            max_steps: 100_000,
        }
    }
}

impl Config {
    /// Validates the step size and budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is non-positive or non-finite, or the
    /// budget is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        if self.max_steps == 0 {
            return Err("max_steps must be nonzero");
        }
        Ok(())
    }
}

/// Errors that can occur during the bracket sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("no sign change within {max_steps} steps {direction} of {seed}")]
    NoSignChange {
        seed: f64,
        direction: Direction,
        max_steps: usize,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

/// Walks outward from `seed` until consecutive evaluations change sign,
/// returning the enclosing interval as `[left, right]` with `left ≤ right`.
///
/// Probe offsets are computed as `i·step` from the seed rather than
/// accumulated, so long sweeps do not drift.
///
/// # Errors
///
/// Returns an error if the config is invalid, a probe evaluates to a
/// non-finite value, or the step budget is exhausted without a sign change.
pub fn find_bracket(
    cubic: &Cubic,
    seed: f64,
    direction: Direction,
    config: &Config,
) -> Result<[f64; 2], Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut prev = seed;
    let mut prev_value = value_at(cubic, seed)?;

    for i in 1..=config.max_steps {
        let curr = seed + direction.signum() * (i as f64) * config.step;
        let curr_value = value_at(cubic, curr)?;

        if prev_value * curr_value <= 0.0 {
            return Ok(match direction {
                Direction::Right => [prev, curr],
                Direction::Left => [curr, prev],
            });
        }

        prev = curr;
        prev_value = curr_value;
    }

    Err(Error::NoSignChange {
        seed,
        direction,
        max_steps: config.max_steps,
    })
}

/// Evaluates the cubic and rejects non-finite results.
fn value_at(cubic: &Cubic, x: f64) -> Result<f64, Error> {
    let value = cubic.eval(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}
