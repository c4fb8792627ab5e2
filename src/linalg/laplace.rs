//! Cofactor (Laplace) expansion.
//!
//! Inputs are validated once, at the public boundary, into a [`SquareMatrix`].
//! Everything below that boundary trusts its input: the recursion never
//! re-checks the submatrices it builds.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::matrix::{Matrix, MatrixError};
use crate::traits::SignedScalar;

/// Non-empty square matrix accepted by the cofactor engine.
///
/// Only produced through a validating constructor
/// ([`SquareMatrix::from_rows`], `TryFrom<Matrix<T>>`) or by the engine
/// itself, so `det`, `minors`, `cofactors` and `adjugate` cannot fail.
///
/// ```
/// use laplace::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(m.det(), -2);
/// assert_eq!(m.adjugate().to_rows(), vec![vec![4, -2], vec![-3, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    inner: Matrix<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Validate a sequence of rows.
    ///
    /// Fails with [`MatrixError::InvalidShape`] when there are no rows or when
    /// any row's length differs from the number of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|row| row.as_ref().len() != n) {
            return Err(MatrixError::InvalidShape);
        }
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self::from_raw(n, data))
    }

    fn from_raw(n: usize, data: Vec<T>) -> Self {
        Self {
            inner: Matrix::from_vec(n, n, data),
        }
    }

    /// Dimension `n` of the `n x n` matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// Borrow as a general [`Matrix`].
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    /// Unwrap into a general [`Matrix`].
    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.inner.to_rows()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let n = self.dim();
        let src = self.inner.as_slice();
        let data = (0..n * n).map(|k| src[(k % n) * n + k / n]).collect();
        Self::from_raw(n, data)
    }
}

impl<T: Copy> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    /// Fails with [`MatrixError::InvalidShape`] for empty or non-square input.
    fn try_from(m: Matrix<T>) -> Result<Self, MatrixError> {
        if m.is_empty() || !m.is_square() {
            return Err(MatrixError::InvalidShape);
        }
        Ok(Self { inner: m })
    }
}

impl<T> From<SquareMatrix<T>> for Matrix<T> {
    fn from(m: SquareMatrix<T>) -> Self {
        m.inner
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.inner[idx]
    }
}

impl<T: SignedScalar> SquareMatrix<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Exact for integer elements as long as every partial product fits the
    /// element type. Factorial cost in the dimension; see
    /// [`SquareMatrix::det_lu`] for the pivoted float alternative.
    ///
    /// # Panics
    ///
    /// Integer arithmetic is unchecked: an overflowing product or sum panics
    /// in debug builds and wraps in release builds. Widen the element type
    /// (for example `i64` to `i128`) when entries are large.
    pub fn det(&self) -> T {
        laplace_det(self.inner.as_slice(), self.dim())
    }

    /// Matrix of minors: entry `(i, j)` is the determinant of the submatrix
    /// left after deleting row `i` and column `j`.
    ///
    /// A 1×1 matrix has the minor matrix `[[1]]`, whatever its element.
    pub fn minors(&self) -> Self {
        let n = self.dim();
        if n == 1 {
            return Self::from_raw(1, vec![T::one()]);
        }
        let src = self.inner.as_slice();
        let mut sub = Vec::with_capacity((n - 1) * (n - 1));
        let data = (0..n * n)
            .map(|k| {
                excise(src, n, k / n, k % n, &mut sub);
                laplace_det(&sub, n - 1)
            })
            .collect();
        Self::from_raw(n, data)
    }

    /// Cofactor matrix: the minors with `(-1)^(i+j)` applied.
    pub fn cofactors(&self) -> Self {
        Self {
            inner: checkerboard(self.minors().inner),
        }
    }

    /// Adjugate: transpose of the cofactor matrix.
    ///
    /// Satisfies `M * adj(M) == det(M) * I`.
    pub fn adjugate(&self) -> Self {
        self.cofactors().transpose()
    }
}

/// Determinant of a matrix given as rows.
///
/// - no rows → [`MatrixError::InvalidType`]
/// - one empty row (`[[]]`, the 0×0 convention) → `1`
/// - any row length different from the row count → [`MatrixError::InvalidShape`]
///
/// # Panics
///
/// Same overflow behaviour as [`SquareMatrix::det`]: integer elements must
/// be wide enough for the products the expansion forms.
///
/// ```
/// use laplace::{determinant, MatrixError};
///
/// assert_eq!(determinant(&[[1, 2], [3, 4]]), Ok(-2));
///
/// let zero_by_zero: Vec<Vec<i64>> = vec![vec![]];
/// assert_eq!(determinant(&zero_by_zero), Ok(1));
///
/// assert_eq!(determinant(&[[1, 2, 3], [4, 5, 6]]), Err(MatrixError::InvalidShape));
/// ```
pub fn determinant<T, R>(rows: &[R]) -> Result<T, MatrixError>
where
    T: SignedScalar,
    R: AsRef<[T]>,
{
    if rows.is_empty() {
        log::debug!("determinant: rejected input with no rows");
        return Err(MatrixError::InvalidType);
    }
    if rows.len() == 1 && rows[0].as_ref().is_empty() {
        return Ok(T::one());
    }
    Ok(validate("determinant", rows)?.det())
}

/// Matrix of minors of a non-empty square matrix given as rows.
///
/// Empty or non-square input fails with [`MatrixError::InvalidShape`].
///
/// ```
/// use laplace::minor;
///
/// let m = minor(&[[1, 1, 1], [1, 1, 0], [0, 1, 1]]).unwrap();
/// assert_eq!(m.to_rows(), vec![vec![1, 1, 1], vec![0, 1, 1], vec![-1, -1, 0]]);
/// assert_eq!(minor(&[[5]]).unwrap().to_rows(), vec![vec![1]]);
/// ```
pub fn minor<T, R>(rows: &[R]) -> Result<Matrix<T>, MatrixError>
where
    T: SignedScalar,
    R: AsRef<[T]>,
{
    Ok(validate("minor", rows)?.minors().into_matrix())
}

/// Cofactor matrix of a non-empty square matrix given as rows.
///
/// Shares [`minor`]'s validation and failure surface.
///
/// ```
/// use laplace::cofactor;
///
/// let c = cofactor(&[[1, 1, 1], [1, 1, 0], [0, 1, 1]]).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![1, -1, 1], vec![0, 1, -1], vec![-1, 1, 0]]);
/// ```
pub fn cofactor<T, R>(rows: &[R]) -> Result<Matrix<T>, MatrixError>
where
    T: SignedScalar,
    R: AsRef<[T]>,
{
    minor(rows).map(checkerboard)
}

/// Adjugate of a non-empty square matrix given as rows.
///
/// Empty or non-square input fails with [`MatrixError::InvalidShape`].
///
/// ```
/// use laplace::adjugate;
///
/// let a = adjugate(&[[1, 1, 1], [1, 1, 0], [0, 1, 1]]).unwrap();
/// assert_eq!(a.to_rows(), vec![vec![1, 0, -1], vec![-1, 1, 1], vec![1, -1, 0]]);
/// ```
pub fn adjugate<T, R>(rows: &[R]) -> Result<Matrix<T>, MatrixError>
where
    T: SignedScalar,
    R: AsRef<[T]>,
{
    Ok(validate("adjugate", rows)?.adjugate().into_matrix())
}

fn validate<T: Copy, R: AsRef<[T]>>(op: &str, rows: &[R]) -> Result<SquareMatrix<T>, MatrixError> {
    match SquareMatrix::from_rows(rows) {
        Ok(m) => {
            log::trace!("{}: {}x{} input", op, m.dim(), m.dim());
            Ok(m)
        }
        Err(e) => {
            log::debug!("{}: rejected {}-row input: {}", op, rows.len(), e);
            Err(e)
        }
    }
}

// ---------------------------------------------------------------------------
// Internal recursion. `data` is an n×n row-major block; no validation.
// ---------------------------------------------------------------------------

pub(crate) fn laplace_det<T: SignedScalar>(data: &[T], n: usize) -> T {
    match n {
        0 => T::one(),
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => {
            let mut sub = Vec::with_capacity((n - 1) * (n - 1));
            let mut det = T::zero();
            for j in 0..n {
                excise(data, n, 0, j, &mut sub);
                let term = data[j] * laplace_det(&sub, n - 1);
                det = if j % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

/// Fill `out` with `src` minus row `skip_row` and column `skip_col`.
fn excise<T: Copy>(src: &[T], n: usize, skip_row: usize, skip_col: usize, out: &mut Vec<T>) {
    out.clear();
    for (r, row) in src.chunks_exact(n).enumerate() {
        if r == skip_row {
            continue;
        }
        out.extend_from_slice(&row[..skip_col]);
        out.extend_from_slice(&row[skip_col + 1..]);
    }
}

fn checkerboard<T: SignedScalar>(m: Matrix<T>) -> Matrix<T> {
    let n = m.ncols();
    let data = m
        .into_vec()
        .into_iter()
        .enumerate()
        .map(|(k, x)| if (k / n + k % n) % 2 == 0 { x } else { -x })
        .collect();
    Matrix::from_vec(n, n, data)
}
