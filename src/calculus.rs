//! Polynomial calculus on coefficient slices, and a closed-form sum.
//!
//! Polynomials are stored by ascending power: `[5, 3, 0, 1]` is
//! `5 + 3x + x³`.

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::{FloatScalar, Scalar};

/// Derivative of a polynomial.
///
/// `None` for an empty slice; a constant differentiates to `[0]`. The result
/// is not trimmed, so it always has one coefficient fewer than the input.
///
/// ```
/// use laplace::calculus::poly_derivative;
///
/// assert_eq!(poly_derivative(&[5, 3, 0, 1]), Some(vec![3, 0, 3]));
/// assert_eq!(poly_derivative(&[7]), Some(vec![0]));
/// assert_eq!(poly_derivative::<i32>(&[]), None);
/// ```
pub fn poly_derivative<T: Scalar>(poly: &[T]) -> Option<Vec<T>> {
    match poly.len() {
        0 => None,
        1 => Some(vec![T::zero()]),
        _ => {
            let mut power = T::zero();
            Some(
                poly[1..]
                    .iter()
                    .map(|&c| {
                        power = power + T::one();
                        power * c
                    })
                    .collect(),
            )
        }
    }
}

/// Antiderivative of a polynomial with integration constant `c`.
///
/// Returns `[c, a0/1, a1/2, …]` with trailing zeros dropped, keeping at
/// least the constant term. `None` for an empty slice.
///
/// ```
/// use laplace::calculus::poly_integral;
///
/// assert_eq!(poly_integral(&[5.0, 3.0, 0.0, 1.0], 0.0), Some(vec![0.0, 5.0, 1.5, 0.0, 0.25]));
/// assert_eq!(poly_integral(&[0.0], 2.0), Some(vec![2.0]));
/// ```
pub fn poly_integral<T: FloatScalar>(poly: &[T], c: T) -> Option<Vec<T>> {
    if poly.is_empty() {
        return None;
    }
    let mut out = Vec::with_capacity(poly.len() + 1);
    out.push(c);
    let mut power = T::zero();
    for &a in poly {
        power = power + T::one();
        out.push(a / power);
    }
    while out.len() > 1 && out.last() == Some(&T::zero()) {
        out.pop();
    }
    Some(out)
}

/// `1² + 2² + … + n²`, via `n(n + 1)(2n + 1) / 6`.
///
/// `None` for `n == 0`, or when the sum itself does not fit in `u64`. The
/// product is formed in `u128`, so every representable sum is returned.
///
/// ```
/// use laplace::calculus::summation_i_squared;
///
/// assert_eq!(summation_i_squared(5), Some(55));
/// assert_eq!(summation_i_squared(0), None);
/// ```
pub fn summation_i_squared(n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let n = u128::from(n);
    // Only n far past any u64-sized sum can overflow the u128 product.
    let p = n.checked_mul(n + 1)?.checked_mul(2 * n + 1)?;
    u64::try_from(p / 6).ok()
}
