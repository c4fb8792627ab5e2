use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::{LinalgError, SquareMatrix};
use crate::matrix::{Matrix, MatrixError};
use crate::traits::FloatScalar;

/// Gaussian elimination with partial pivoting, in place.
///
/// On return `a` holds U on and above the diagonal and the multipliers of L
/// (unit diagonal implied) below it. `perm[i]` is the source row of row `i`.
/// Returns `true` if the number of row swaps was even.
fn lu_in_place<T: FloatScalar>(a: &mut Matrix<T>, perm: &mut [usize]) -> Result<bool, LinalgError> {
    let n = a.nrows();
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    // Pivots are judged against the largest entry, so uniformly scaled
    // matrices factor the same way.
    let scale = a
        .as_slice()
        .iter()
        .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc });
    let threshold = T::from(n).unwrap() * T::epsilon() * scale;

    let mut even = true;

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = a[(col, col)].abs();
        for row in (col + 1)..n {
            let val = a[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val <= threshold {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = a[(col, j)];
                a[(col, j)] = a[(max_row, j)];
                a[(max_row, j)] = tmp;
            }
            even = !even;
        }

        let inv_pivot = T::one() / a[(col, col)];
        for row in (col + 1)..n {
            let factor = a[(row, col)] * inv_pivot;
            a[(row, col)] = factor;
            for j in (col + 1)..n {
                let upper = a[(col, j)];
                a[(row, j)] = a[(row, j)] - factor * upper;
            }
        }
    }

    Ok(even)
}

/// Solve `LUx = Pb` given the packed factors.
fn lu_solve<T: FloatScalar>(lu: &Matrix<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Forward substitution: Ly = Pb
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution: Ux = y
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum / lu[(i, i)];
    }
}

/// LU factorization (partial pivoting) of a float [`SquareMatrix`].
///
/// # Example
///
/// ```
/// use laplace::SquareMatrix;
///
/// let a = SquareMatrix::from_rows(&[[2.0_f64, 1.0], [5.0, 3.0]]).unwrap();
/// let lu = a.lu().unwrap();
/// let x = lu.solve(&[4.0, 11.0]);
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> Lu<T> {
    /// Factor `a`. Fails with [`LinalgError::Singular`] when a pivot is no
    /// larger than `n * eps * max|a_ij|` (always for the zero matrix).
    pub fn new(a: &SquareMatrix<T>) -> Result<Self, LinalgError> {
        let mut lu = a.as_matrix().clone();
        let mut perm = vec![0usize; a.dim()];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve `Ax = b`. Panics if `b.len()` differs from the dimension.
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.lu.nrows();
        assert_eq!(b.len(), n, "rhs length mismatch");
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.perm, b, &mut x);
        x
    }

    /// Inverse, one column solve at a time.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut e = vec![T::zero(); n];
        let mut col = vec![T::zero(); n];
        for j in 0..n {
            if j > 0 {
                e[j - 1] = T::zero();
            }
            e[j] = T::one();
            lu_solve(&self.lu, &self.perm, &e, &mut col);
            for (i, &v) in col.iter().enumerate() {
                inv[(i, j)] = v;
            }
        }
        inv
    }

    /// Determinant: signed product of U's diagonal.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let sign = if self.even { T::one() } else { -T::one() };
        (0..n).fold(sign, |d, i| d * self.lu[(i, i)])
    }
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// LU factorization.
    pub fn lu(&self) -> Result<Lu<T>, LinalgError> {
        Lu::new(self)
    }

    /// Determinant via pivoted elimination; `0` for a singular matrix.
    ///
    /// Cubic rather than factorial cost, but rounds differently from
    /// [`SquareMatrix::det`] for float inputs.
    ///
    /// ```
    /// use laplace::SquareMatrix;
    /// let m = SquareMatrix::from_rows(&[[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]).unwrap();
    /// assert!((m.det_lu() - (-306.0)).abs() < 1e-10);
    /// assert!((m.det_lu() - m.det()).abs() < 1e-10);
    /// ```
    pub fn det_lu(&self) -> T {
        match self.lu() {
            Ok(lu) => lu.det(),
            Err(_) => T::zero(),
        }
    }

    /// Inverse via LU.
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        Ok(self.lu()?.inverse())
    }

    /// Solve `Ax = b` via LU. Panics if `b.len()` differs from the dimension.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        Ok(self.lu()?.solve(b))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// [`SquareMatrix::det_lu`] on a general matrix; empty or non-square
    /// input fails with [`MatrixError::InvalidShape`].
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((m.det_lu().unwrap() + 14.0).abs() < 1e-12);
    /// ```
    pub fn det_lu(&self) -> Result<T, MatrixError> {
        Ok(SquareMatrix::try_from(self.clone())?.det_lu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_det_lu_checks_shape() {
        let m = Matrix::from_vec(2, 3, vec![1.0_f64; 6]);
        assert_eq!(m.det_lu(), Err(MatrixError::InvalidShape));
    }

    fn sq(rows: &[[f64; 3]]) -> SquareMatrix<f64> {
        SquareMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn det_matches_laplace() {
        let m = sq(&[[5.0, -2.0, 3.0], [1.0, 4.0, 0.0], [-1.0, 2.0, 6.0]]);
        assert!((m.det_lu() - 150.0).abs() < 1e-10);
        assert_eq!(m.det(), 150.0);
    }

    #[test]
    fn det_needs_pivot() {
        let m = sq(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((m.det_lu() + 1.0).abs() < 1e-14);
    }

    #[test]
    fn singular() {
        let m = sq(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
        assert_eq!(m.lu().unwrap_err(), LinalgError::Singular);
        assert_eq!(m.det_lu(), 0.0);
        assert_eq!(m.inverse().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = sq(&[[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let inv = m.inverse().unwrap();
        let prod = m.as_matrix() * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn inverse_agrees_with_adjugate() {
        let m = sq(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        let det = m.det();
        let via_adj = m.adjugate().into_matrix() / det;
        let via_lu = m.inverse().unwrap();
        for (a, b) in via_adj.as_slice().iter().zip(via_lu.as_slice()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn pivot_threshold_scales_with_entries() {
        for scale in [1e-20, 1e-9, 1.0, 1e12] {
            let m = sq(&[
                [4.0 * scale, 1.0 * scale, 0.0],
                [1.0 * scale, 3.0 * scale, 1.0 * scale],
                [0.0, 1.0 * scale, 2.0 * scale],
            ]);
            let det = m.det_lu();
            let expected = 18.0 * scale * scale * scale;
            assert!((det - expected).abs() <= 1e-12 * expected.abs());
            assert!(m.inverse().is_ok());
        }
    }

    #[test]
    fn zero_matrix_is_singular() {
        let m = sq(&[[0.0; 3]; 3]);
        assert_eq!(m.lu().unwrap_err(), LinalgError::Singular);
        assert_eq!(m.det_lu(), 0.0);
    }

    #[test]
    fn solve() {
        let m = sq(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        let x = m.solve(&[8.0, -11.0, -3.0]).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] + 1.0).abs() < 1e-12);
    }
}
