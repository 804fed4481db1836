use thiserror::Error;

use crate::{bisection, sweep};

/// Errors that can occur while orchestrating a root-finding run.
///
/// Any component failure aborts the whole run; there is no partial-result
/// recovery.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// An outward sweep exhausted its step budget or hit a non-finite value.
    #[error(transparent)]
    Sweep(#[from] sweep::Error),

    /// Bisection rejected its bracket or configuration.
    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}
