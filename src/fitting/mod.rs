//! # Fitting
//! Root finding tools for one dimensional functions.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

mod bisection;
mod newton;

pub use self::bisection::bisect;
pub use self::newton::newton_raphson;

/// Error type for fitting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvergenceError {
    /// Maximum number of iterations reached without convergence.
    #[error("Maximum number of iterations reached without convergence")]
    Iterations,

    /// Non-finite value encountered during evaluation.
    #[error("Non-finite value encountered during evaluation")]
    NonFinite,

    /// Zero derivative encountered during evaluation.
    #[error("Zero derivative encountered during evaluation")]
    ZeroDerivative,

    /// Function does not change sign over the provided bracket.
    #[error("Function does not change sign over the provided bracket")]
    InvalidBracket,
}

/// Result type for fitting operations.
pub type FittingResult<T> = Result<T, ConvergenceError>;

/// A converged root of a one dimensional function.
///
/// The iteration count is diagnostic only, two different solvers reaching the
/// same value may take a very different number of steps to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Root<T> {
    /// Location of the root.
    pub value: T,

    /// Number of refinement steps taken to reach it.
    pub iterations: usize,
}
