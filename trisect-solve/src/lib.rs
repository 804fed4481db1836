//! Root-finding pipeline for monic cubic polynomials.
//!
//! The pipeline has three stages:
//!
//! - [`sweep`] — outward fixed-step search for a sign-change bracket
//! - [`bisection`] — refinement of a bracketed root
//! - [`roots`] — shape-based case dispatch over the whole real line
//!
//! [`roots::find_roots`] ties the stages together: it classifies the cubic
//! by the critical points of its derivative, decides how many roots exist
//! and on which side of the critical points each lies, then brackets and
//! bisects each one.

mod observe;

pub mod bisection;
pub mod roots;
pub mod sweep;

pub use observe::Observer;
