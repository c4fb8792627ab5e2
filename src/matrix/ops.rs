use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Scalar, SignedScalar};

use super::{Matrix, MatrixError};

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows,
            self.ncols,
            op,
            rhs.nrows,
            rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise (Hadamard) product. Panics on a dimension mismatch.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]);
    /// assert_eq!(a.element_mul(&b).as_slice(), &[5, 12, 21, 32]);
    /// ```
    pub fn element_mul(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, ".*", |a, b| a * b)
    }

    /// Element-wise division. Panics on a dimension mismatch.
    pub fn element_div(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, "./", |a, b| a / b)
    }

    /// Matrix product, failing with [`MatrixError::DimensionMismatch`] when the
    /// inner dimensions disagree.
    ///
    /// ```
    /// use laplace::{Matrix, MatrixError};
    ///
    /// let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    /// let b = Matrix::from_vec(3, 1, vec![1, 0, -1]);
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[-2, -2]);
    /// assert_eq!(a.matmul(&a).unwrap_err(), MatrixError::DimensionMismatch);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            log::debug!(
                "matmul: inner dimensions disagree ({}x{} * {}x{})",
                self.nrows,
                self.ncols,
                rhs.nrows,
                rhs.ncols
            );
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(self.product(rhs))
    }

    fn product(&self, rhs: &Self) -> Self {
        let (m, k, n) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            let lhs_row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let mut sum = T::zero();
                for (p, &a) in lhs_row.iter().enumerate() {
                    sum = sum + a * rhs.data[p * n + j];
                }
                data.push(sum);
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: n,
        }
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use laplace::Matrix;
    /// let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "+", |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Self) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Self) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: SignedScalar> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on a dimension mismatch; use [`Matrix::matmul`] to get an error instead.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        self.product(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Self) -> Matrix<T> {
        &self * &rhs
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        &self / rhs
    }
}
