//! # Square Root Approximation
//!
//! Iterative approximation of square roots without calling a built in root
//! function. Refinement is Newton's method applied to `f(z) = z^2 - x`, with
//! the initial guess chosen by cutting the floating point exponent in half.
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

use crate::errors::{Error, RootfitResult};
use crate::fitting::{ConvergenceError, Root, newton_raphson};

/// Target precision of the squared estimate.
///
/// Scaled by the magnitude of the input before use, a fixed absolute
/// precision stops being reachable once float spacing around the input
/// exceeds it.
const PRECISION: f64 = 1e-15;

/// Approximate the square root of a non-negative value.
///
/// The estimate is refined until `|estimate^2 - x| <= 1e-15 * max(1, x)`.
/// Zero returns exactly zero without entering the solver.
///
/// ```
///     use rootfit::sqrt::approx_sqrt;
///     let root = approx_sqrt(2.0).unwrap();
///     assert!((root * root - 2.0_f64).abs() <= 1e-12);
///     assert!(approx_sqrt(-2.0).is_err());
/// ```
///
/// # Errors
///
/// [`Error::NegativeInput`] when the input is negative, carrying the value
/// for display. [`Error::Convergence`] when the input is NaN or infinite.
pub fn approx_sqrt<T>(x: T) -> RootfitResult<T>
where
    T: num_traits::Float + num_traits::ToPrimitive + num_traits::NumAssignOps,
{
    Ok(approx_sqrt_converged(x)?.value)
}

/// Approximate the square root of a non-negative value, keeping the
/// convergence diagnostics.
///
/// Identical to [`approx_sqrt`] but returns the full [`Root`] record, which
/// includes the number of refinement steps taken.
///
/// # Errors
///
/// See [`approx_sqrt`].
pub fn approx_sqrt_converged<T>(x: T) -> RootfitResult<Root<T>>
where
    T: num_traits::Float + num_traits::ToPrimitive + num_traits::NumAssignOps,
{
    if !x.is_finite() {
        Err(ConvergenceError::NonFinite)?;
    }
    if x < T::zero() {
        return Err(Error::NegativeInput(x.to_f64().unwrap_or(f64::NAN)));
    }
    if x == T::zero() {
        // Newton divides by the estimate, zero must never enter the loop.
        return Ok(Root {
            value: T::zero(),
            iterations: 0,
        });
    }

    let two = T::one() + T::one();
    let func = |z: T| z * z - x;
    let der = |z: T| two * z;

    Ok(newton_raphson(func, der, initial_guess(x), tolerance(x))?)
}

/// Convergence tolerance for the squared estimate, [`PRECISION`] scaled by
/// the magnitude of the input.
///
/// Floored at a few machine epsilons so the criterion stays reachable for
/// float types with less resolution than f64.
fn tolerance<T>(x: T) -> T
where
    T: num_traits::Float,
{
    let floor = T::epsilon() * T::from(4.0).unwrap();
    let precision = T::from(PRECISION).unwrap().max(floor);
    precision * x.max(T::one())
}

/// Power of two with half the exponent of the input.
///
/// This lands within a factor of two of the true root at any magnitude,
/// keeping Newton a handful of quadratic steps from convergence even at the
/// edges of float range. Only the exponent is touched, all refinement is
/// left to the solver.
fn initial_guess<T>(x: T) -> T
where
    T: num_traits::Float,
{
    let half = T::from(0.5).unwrap();
    (x.log2() * half).floor().exp2()
}
