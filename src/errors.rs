//! Errors which may be raised by this crate.
//
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

use crate::fitting::ConvergenceError;

/// Possible errors raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Square roots of negative numbers are not real valued.
    ///
    /// Carries the offending input for diagnostic display.
    #[error("cannot take the square root of a negative number: {0}")]
    NegativeInput(f64),

    /// An iterative solver failed to converge.
    #[error("solver failed to converge: {0}")]
    Convergence(#[from] ConvergenceError),
}

/// Result type for this crate.
pub type RootfitResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{ConvergenceError, Error};

    #[test]
    fn test_error_display() {
        let err = Error::NegativeInput(-2.0);
        assert_eq!(
            err.to_string(),
            "cannot take the square root of a negative number: -2"
        );

        let err: Error = ConvergenceError::Iterations.into();
        assert_eq!(
            err.to_string(),
            "solver failed to converge: Maximum number of iterations reached without convergence"
        );
    }
}
