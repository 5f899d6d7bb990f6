//! # rootfit
//! Iterative approximation of square roots, along with the one dimensional
//! root finding methods used to compute them.
//!
//! The square root approximator never calls a built in root function. An
//! estimate is refined with [`fitting::newton_raphson`] until the square of
//! the estimate is within a relative precision of the input value.
//!
//! This crate is intentionally free of any binding or I/O layers, it is a
//! small numeric library which may be embedded anywhere.
//!

pub mod errors;
pub mod fitting;
pub mod sqrt;

/// Common useful imports
pub mod prelude {
    pub use crate::errors::{Error, RootfitResult};
    pub use crate::fitting::{ConvergenceError, FittingResult, Root, bisect, newton_raphson};
    pub use crate::sqrt::{approx_sqrt, approx_sqrt_converged};
}
