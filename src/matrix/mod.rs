mod ops;
mod util;

pub use util::Axis;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Errors from building or validating a matrix.
///
/// `InvalidType` means the input is not a usable sequence of rows at all;
/// `InvalidShape` means the rows are there but the dimensions are wrong
/// (ragged, non-square, or empty where emptiness is not allowed).
/// `DimensionMismatch` comes from binary operations whose operands do not
/// line up.
///
/// ```
/// use laplace::{determinant, minor, MatrixError};
///
/// let no_rows: Vec<Vec<i64>> = vec![];
/// assert_eq!(determinant(&no_rows).unwrap_err(), MatrixError::InvalidType);
/// assert_eq!(minor(&no_rows).unwrap_err(), MatrixError::InvalidShape);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Input is not a non-empty sequence of rows.
    InvalidType,
    /// Rows have the wrong dimensions for the requested operation.
    InvalidShape,
    /// Operand dimensions disagree (`matmul`, `concat`).
    DimensionMismatch,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidType => write!(f, "matrix must be a list of lists"),
            MatrixError::InvalidShape => write!(f, "matrix must be a non-empty square matrix"),
            MatrixError::DimensionMismatch => write!(f, "matrix dimensions do not agree"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage; dimensions are set at runtime and never change
/// after construction. Every operation returns a fresh matrix.
///
/// # Examples
///
/// ```
/// use laplace::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 2));
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(1, 1)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::fill(2, 3, 7);
    /// assert_eq!(m[(1, 2)], 7);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let id = Matrix::<i64>::eye(3);
    /// assert_eq!(id[(2, 2)], 1);
    /// assert_eq!(id[(2, 0)], 0);
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Matrix<T> {
    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as i32);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Build a matrix from a sequence of rows.
    ///
    /// Fails with [`MatrixError::InvalidShape`] when there are no rows, the
    /// first row is empty, or the rows differ in length.
    ///
    /// ```
    /// use laplace::{Matrix, MatrixError};
    ///
    /// let m = Matrix::try_from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    ///
    /// let ragged = vec![vec![1, 2], vec![3]];
    /// assert_eq!(Matrix::try_from_rows(&ragged).unwrap_err(), MatrixError::InvalidShape);
    /// ```
    pub fn try_from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError>
    where
        T: Copy,
    {
        let ncols = match rows.first() {
            Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
            _ => return Err(MatrixError::InvalidShape),
        };
        if rows.iter().any(|row| row.as_ref().len() != ncols) {
            return Err(MatrixError::InvalidShape);
        }
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// A `1 x n` matrix holding `values`.
    pub fn row_vector(values: Vec<T>) -> Self {
        let ncols = values.len();
        Self::from_vec(1, ncols, values)
    }

    /// An `n x 1` matrix holding `values`.
    pub fn column_vector(values: Vec<T>) -> Self {
        let nrows = values.len();
        Self::from_vec(nrows, 1, values)
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `i` as a slice. Panics if `i >= nrows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Copy the matrix out as nested rows.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    /// ```
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}
