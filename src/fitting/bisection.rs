//! # Bisection
//!
//! Bracketing root finder. Gains a single bit of precision per step, but is
//! guaranteed to make progress whenever the function changes sign over the
//! starting bracket.
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

use crate::fitting::{ConvergenceError, FittingResult, Root};

/// One bit of the bracket per step, enough to exhaust every representable
/// f64 interval.
const MAX_BISECTIONS: usize = 2200;

/// Solve root using bisection over a bracketing interval.
///
/// The function must change sign over `[lower, upper]`. The bracket is cut in
/// half each step, keeping the half over which the sign change occurs, until
/// the midpoint evaluates within `atol` of zero. If the bracket collapses to
/// adjacent floats before the tolerance is met, the midpoint is returned as
/// the best representable answer.
///
/// The bounds may be given in either order.
///
/// ```
///     use rootfit::fitting::bisect;
///     let f = |x: f64| { x * x - 2.0 };
///     let root = bisect(f, 0.0, 2.0, 1e-12).unwrap();
///     assert!((root.value - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// [`ConvergenceError`] may be returned in the following cases:
///     - Any function evaluation returns a non-finite value.
///     - The function does not change sign over the bracket.
///     - Failed to converge within the iteration cap.
#[allow(
    clippy::missing_panics_doc,
    reason = "By construction this cannot panic."
)]
pub fn bisect<T>(func: impl Fn(T) -> T, lower: T, upper: T, atol: T) -> FittingResult<Root<T>>
where
    T: num_traits::Float,
{
    let (mut lower, mut upper) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };

    let f_lower = func(lower);
    let f_upper = func(upper);
    if !f_lower.is_finite() || !f_upper.is_finite() {
        Err(ConvergenceError::NonFinite)?;
    }
    if f_lower.abs() <= atol {
        return Ok(Root {
            value: lower,
            iterations: 0,
        });
    }
    if f_upper.abs() <= atol {
        return Ok(Root {
            value: upper,
            iterations: 0,
        });
    }
    if (f_lower > T::zero()) == (f_upper > T::zero()) {
        Err(ConvergenceError::InvalidBracket)?;
    }

    let lower_is_negative = f_lower < T::zero();
    let half = T::from(0.5).unwrap();

    for iterations in 1..=MAX_BISECTIONS {
        let mid = lower + (upper - lower) * half;

        // no representable float remains between the bounds
        if mid <= lower || mid >= upper {
            return Ok(Root {
                value: mid,
                iterations,
            });
        }

        let f_mid = func(mid);
        if !f_mid.is_finite() {
            Err(ConvergenceError::NonFinite)?;
        }
        if f_mid.abs() <= atol {
            return Ok(Root {
                value: mid,
                iterations,
            });
        }

        if (f_mid < T::zero()) == lower_is_negative {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    Err(ConvergenceError::Iterations)
}

#[cfg(test)]
mod tests {
    use crate::fitting::{ConvergenceError, bisect};

    #[test]
    fn test_bisect() {
        let f = |x: f64| x * x - 2.0;

        let root = bisect(f, 0.0, 2.0, 1e-12).unwrap();
        assert!((root.value - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(root.iterations > 0);
    }

    #[test]
    fn test_bisect_decreasing() {
        // sign change runs high to low over the bracket
        let f = |x: f64| 2.0 - x;

        let root = bisect(f, 0.0, 10.0, 1e-12).unwrap();
        assert!((root.value - 2.0).abs() < 1e-11);
    }

    #[test]
    fn test_bisect_reversed_bounds() {
        let f = |x: f64| x * x - 2.0;

        let root = bisect(f, 2.0, 0.0, 1e-12).unwrap();
        assert!((root.value - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_bisect_endpoint_root() {
        let f = |x: f64| x;

        let root = bisect(f, 0.0, 5.0, 1e-12).unwrap();
        assert_eq!(root.value, 0.0);
        assert_eq!(root.iterations, 0);
    }

    #[test]
    fn test_bisect_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = bisect(f, 2.0, 3.0, 1e-12);
        assert_eq!(result, Err(ConvergenceError::InvalidBracket));

        // no real root at all
        let f = |x: f64| x * x + 1.0;
        let result = bisect(f, -1.0, 1.0, 1e-12);
        assert_eq!(result, Err(ConvergenceError::InvalidBracket));
    }

    #[test]
    fn test_bisect_bracket_collapse() {
        // zero tolerance on an irrational root, the bracket runs out of
        // floats and the midpoint is returned
        let f = |x: f64| x * x - 2.0;

        let root = bisect(f, 0.0, 2.0, 0.0).unwrap();
        assert!((root.value - std::f64::consts::SQRT_2).abs() < 1e-15);
    }
}
