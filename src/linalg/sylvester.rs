use alloc::vec::Vec;

use crate::linalg::laplace::laplace_det;
use crate::linalg::SquareMatrix;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Definiteness class of a symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definiteness {
    PositiveDefinite,
    PositiveSemiDefinite,
    NegativeDefinite,
    NegativeSemiDefinite,
    Indefinite,
}

impl core::fmt::Display for Definiteness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Definiteness::PositiveDefinite => "Positive definite",
            Definiteness::PositiveSemiDefinite => "Positive semi-definite",
            Definiteness::NegativeDefinite => "Negative definite",
            Definiteness::NegativeSemiDefinite => "Negative semi-definite",
            Definiteness::Indefinite => "Indefinite",
        };
        f.write_str(s)
    }
}

/// Largest dimension classified by principal minors; larger matrices go
/// through their eigenvalues.
const MINOR_PATH_MAX_DIM: usize = 6;

/// Classify a symmetric matrix as positive/negative (semi-)definite or
/// indefinite.
///
/// Returns `None` for an empty, non-square, or non-symmetric matrix
/// (symmetry within `|a - b| <= 1e-8 + 1e-5 * |b|`).
///
/// Up to 6x6 the class comes from Sylvester's criterion: leading principal
/// minors for the strict classes, every principal minor for the
/// semi-definite ones, all evaluated by cofactor expansion. Larger matrices
/// are classified by the signs of their eigenvalues
/// ([`SquareMatrix::symmetric_eigenvalues`]). Either way a value counts as
/// zero when it is within rounding of the matrix's own scale, so a
/// uniformly scaled matrix keeps its class.
///
/// ```
/// use laplace::{definiteness, Definiteness, Matrix};
///
/// let m = Matrix::from_vec(2, 2, vec![2.0_f64, -1.0, -1.0, 2.0]);
/// assert_eq!(definiteness(&m), Some(Definiteness::PositiveDefinite));
///
/// let m = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(definiteness(&m), None);
///
/// assert_eq!(definiteness(&Matrix::<f64>::eye(40)), Some(Definiteness::PositiveDefinite));
/// ```
pub fn definiteness<T: FloatScalar>(m: &Matrix<T>) -> Option<Definiteness> {
    let n = m.nrows();
    if n == 0 || !m.is_square() || !is_symmetric(m) {
        return None;
    }
    if n <= MINOR_PATH_MAX_DIM {
        return Some(by_principal_minors(m));
    }

    let sq = SquareMatrix::try_from(m.clone()).ok()?;
    match sq.symmetric_eigenvalues() {
        Ok(ev) => Some(by_eigenvalues(&ev)),
        Err(e) => {
            log::debug!("definiteness: {}x{} input: {}", n, n, e);
            None
        }
    }
}

fn by_principal_minors<T: FloatScalar>(m: &Matrix<T>) -> Definiteness {
    let n = m.nrows();
    let scale = max_abs(m.as_slice());

    // Laplace expansion of a k x k block sums k! products of k factors.
    let tol = |k: usize| {
        let terms = (1..=k).product::<usize>() * k;
        T::from(terms).unwrap() * T::epsilon() * scale.powi(k as i32)
    };

    // (order, value) of the principal minor on the rows/columns in `mask`.
    let principal = |mask: usize| {
        let idx: Vec<usize> = (0..n).filter(|&i| mask & (1 << i) != 0).collect();
        let k = idx.len();
        let mut sub = Vec::with_capacity(k * k);
        for &i in &idx {
            for &j in &idx {
                sub.push(m[(i, j)]);
            }
        }
        (k, laplace_det(&sub, k))
    };
    let leading: Vec<(usize, T)> = (1..=n).map(|k| principal((1 << k) - 1)).collect();
    let all = || (1usize..(1 << n)).map(&principal);

    let alternating = |k: usize, d: T| if k % 2 == 0 { d } else { -d };

    if leading.iter().all(|&(k, d)| d > tol(k)) {
        Definiteness::PositiveDefinite
    } else if all().all(|(k, d)| d >= -tol(k)) {
        Definiteness::PositiveSemiDefinite
    } else if leading.iter().all(|&(k, d)| alternating(k, d) > tol(k)) {
        Definiteness::NegativeDefinite
    } else if all().all(|(k, d)| alternating(k, d) >= -tol(k)) {
        Definiteness::NegativeSemiDefinite
    } else {
        Definiteness::Indefinite
    }
}

/// `ev` is sorted ascending.
fn by_eigenvalues<T: FloatScalar>(ev: &[T]) -> Definiteness {
    let (lo, hi) = (ev[0], ev[ev.len() - 1]);
    let tol = T::from(ev.len()).unwrap() * T::epsilon() * max_abs(ev);

    if lo > tol {
        Definiteness::PositiveDefinite
    } else if lo >= -tol {
        Definiteness::PositiveSemiDefinite
    } else if hi < -tol {
        Definiteness::NegativeDefinite
    } else if hi <= tol {
        Definiteness::NegativeSemiDefinite
    } else {
        Definiteness::Indefinite
    }
}

fn max_abs<T: FloatScalar>(xs: &[T]) -> T {
    xs.iter()
        .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc })
}

fn is_symmetric<T: FloatScalar>(m: &Matrix<T>) -> bool {
    let rtol = T::from(1e-5).unwrap();
    let atol = T::from(1e-8).unwrap();
    let n = m.nrows();
    (0..n).all(|i| {
        (0..i).all(|j| {
            let (a, b) = (m[(i, j)], m[(j, i)]);
            (a - b).abs() <= atol + rtol * b.abs()
        })
    })
}
