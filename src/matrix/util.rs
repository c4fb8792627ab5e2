use alloc::vec::Vec;

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

/// Axis along which [`Matrix::concat`] joins two matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Stack vertically: rows of `rhs` follow rows of `self`.
    Rows,
    /// Stack horizontally: columns of `rhs` follow columns of `self`.
    Cols,
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Join `self` and `rhs` along `axis`.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] when the dimension that must
    /// agree (columns for [`Axis::Rows`], rows for [`Axis::Cols`]) differs.
    ///
    /// ```
    /// use laplace::{Axis, Matrix};
    ///
    /// let a = Matrix::from_vec(1, 2, vec![1, 2]);
    /// let b = Matrix::from_vec(1, 2, vec![3, 4]);
    /// assert_eq!(a.concat(&b, Axis::Rows).unwrap().shape(), (2, 2));
    /// assert_eq!(a.concat(&b, Axis::Cols).unwrap().as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn concat(&self, rhs: &Self, axis: Axis) -> Result<Self, MatrixError> {
        match axis {
            Axis::Rows => {
                if self.ncols != rhs.ncols {
                    return Err(MatrixError::DimensionMismatch);
                }
                let mut data = Vec::with_capacity(self.data.len() + rhs.data.len());
                data.extend_from_slice(&self.data);
                data.extend_from_slice(&rhs.data);
                Ok(Matrix {
                    data,
                    nrows: self.nrows + rhs.nrows,
                    ncols: self.ncols,
                })
            }
            Axis::Cols => {
                if self.nrows != rhs.nrows {
                    return Err(MatrixError::DimensionMismatch);
                }
                let mut data = Vec::with_capacity(self.data.len() + rhs.data.len());
                for i in 0..self.nrows {
                    data.extend_from_slice(self.row(i));
                    data.extend_from_slice(rhs.row(i));
                }
                Ok(Matrix {
                    data,
                    nrows: self.nrows,
                    ncols: self.ncols + rhs.ncols,
                })
            }
        }
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Sum of diagonal elements.
    ///
    /// ```
    /// use laplace::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// assert_eq!(m.trace(), 5);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        (0..n).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    /// Column sums as a `1 x ncols` matrix.
    pub(crate) fn column_sums(&self) -> Matrix<T> {
        let mut sums = Matrix::zeros(1, self.ncols);
        for row in self.rows() {
            for (s, &x) in sums.data.iter_mut().zip(row) {
                *s = *s + x;
            }
        }
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn sum_and_trace() {
        let m = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.sum(), 45);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn map_changes_type() {
        let m = Matrix::from_vec(1, 3, vec![1, 2, 3]);
        let f = m.map(|x| x as f64 / 2.0);
        assert_eq!(f.as_slice(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn concat_rows() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = Matrix::from_vec(1, 2, vec![5, 6]);
        let c = a.concat(&b, Axis::Rows).unwrap();
        assert_eq!(c.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn concat_cols() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = Matrix::from_vec(2, 1, vec![5, 6]);
        let c = a.concat(&b, Axis::Cols).unwrap();
        assert_eq!(c.to_rows(), vec![vec![1, 2, 5], vec![3, 4, 6]]);
    }

    #[test]
    fn concat_mismatch() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = Matrix::from_vec(1, 3, vec![5, 6, 7]);
        assert_eq!(a.concat(&b, Axis::Rows), Err(MatrixError::DimensionMismatch));
        assert_eq!(a.concat(&b, Axis::Cols), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn column_sums() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m.column_sums().as_slice(), &[5, 7, 9]);
    }
}
