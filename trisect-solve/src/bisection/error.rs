use thiserror::Error;

/// Errors that can occur during bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no sign change in bracket: f({left}) = {left_residual}, f({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite value {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}
