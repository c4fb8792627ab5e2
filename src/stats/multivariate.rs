use crate::linalg::SquareMatrix;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::StatsError;

/// Sample mean and covariance of `n` observations of `d` variables.
///
/// `x` is `n × d`, one observation per row. Returns the `1 × d` mean and the
/// `d × d` sample covariance (divisor `n − 1`). Fewer than two rows give
/// [`StatsError::InsufficientData`].
///
/// ```
/// use laplace::stats::mean_cov;
/// use laplace::Matrix;
///
/// let x = Matrix::from_vec(3, 2, vec![1.0_f64, 2.0, 3.0, 6.0, 5.0, 10.0]);
/// let (mean, cov) = mean_cov(&x).unwrap();
/// assert_eq!(mean.as_slice(), &[3.0, 6.0]);
/// assert_eq!(cov.as_slice(), &[4.0, 8.0, 8.0, 16.0]);
/// ```
pub fn mean_cov<T: FloatScalar>(x: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>), StatsError> {
    let (n, _) = x.shape();
    if n < 2 {
        log::debug!("mean_cov: {} observation(s), need at least 2", n);
        return Err(StatsError::InsufficientData);
    }
    let mean = x.column_sums() / T::from(n).unwrap();
    let centered = Matrix::from_fn(n, x.ncols(), |i, j| x[(i, j)] - mean[(0, j)]);
    let cov = &centered.transpose() * &centered / T::from(n - 1).unwrap();
    Ok((mean, cov))
}

/// Correlation matrix from a covariance matrix: `C[i][j] / (σ_i σ_j)`.
///
/// Non-square input gives [`StatsError::DimensionMismatch`].
///
/// ```
/// use laplace::stats::correlation;
/// use laplace::Matrix;
///
/// let c = Matrix::from_vec(2, 2, vec![36.0_f64, -30.0, -30.0, 100.0]);
/// let r = correlation(&c).unwrap();
/// assert!((r[(0, 1)] + 0.5).abs() < 1e-15);
/// assert!((r[(1, 1)] - 1.0).abs() < 1e-15);
/// ```
pub fn correlation<T: FloatScalar>(c: &Matrix<T>) -> Result<Matrix<T>, StatsError> {
    if !c.is_square() {
        log::debug!("correlation: {}x{} input is not square", c.nrows(), c.ncols());
        return Err(StatsError::DimensionMismatch);
    }
    let d = c.nrows();
    let sd: alloc::vec::Vec<T> = (0..d).map(|i| c[(i, i)].sqrt()).collect();
    Ok(Matrix::from_fn(d, d, |i, j| c[(i, j)] / (sd[i] * sd[j])))
}

/// Multivariate normal distribution estimated from data.
///
/// ```
/// use laplace::stats::MultiNormal;
/// use laplace::Matrix;
///
/// // 2 variables, 4 observations (one per column)
/// let data = Matrix::from_vec(2, 4, vec![
///     1.0_f64, 2.0, 3.0, 4.0,
///     2.0, 1.0, 4.0, 3.0,
/// ]);
/// let mn = MultiNormal::from_data(&data).unwrap();
/// assert_eq!(mn.mean().as_slice(), &[2.5, 2.5]);
///
/// let at_mean = mn.pdf(mn.mean()).unwrap();
/// assert!(at_mean > mn.pdf(&Matrix::column_vector(vec![0.0, 0.0])).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MultiNormal<T> {
    mean: Matrix<T>,
    cov: Matrix<T>,
    cov_inv: Matrix<T>,
    // ln of the normalizing constant, -(d ln 2π + ln|Σ|) / 2
    ln_norm: T,
}

impl<T: FloatScalar> MultiNormal<T> {
    /// Estimate from `d × n` data, one observation per column.
    ///
    /// Needs `n >= 2` ([`StatsError::InsufficientData`]) and `d >= 1`
    /// ([`StatsError::DimensionMismatch`]). A covariance that cannot be
    /// inverted, or whose determinant is not positive, gives
    /// [`StatsError::SingularCovariance`].
    pub fn from_data(data: &Matrix<T>) -> Result<Self, StatsError> {
        let (d, n) = data.shape();
        if n < 2 {
            log::debug!("MultiNormal::from_data: {} observation(s), need at least 2", n);
            return Err(StatsError::InsufficientData);
        }
        if d == 0 {
            return Err(StatsError::DimensionMismatch);
        }
        let (mean_row, cov) = mean_cov(&data.transpose())?;
        let sigma = SquareMatrix::try_from(cov.clone()).map_err(|_| StatsError::DimensionMismatch)?;
        let lu = sigma.lu().map_err(|e| {
            log::debug!("MultiNormal::from_data: covariance rejected: {}", e);
            StatsError::SingularCovariance
        })?;
        let det = lu.det();
        if det <= T::zero() {
            return Err(StatsError::SingularCovariance);
        }
        let df = T::from(d).unwrap();
        let ln_2pi = T::from(num_traits::Float::ln(core::f64::consts::TAU)).unwrap();
        let half = T::from(0.5).unwrap();
        Ok(Self {
            mean: mean_row.transpose(),
            cov,
            cov_inv: lu.inverse(),
            ln_norm: -half * (df * ln_2pi + det.ln()),
        })
    }

    /// Mean, `d × 1`.
    pub fn mean(&self) -> &Matrix<T> {
        &self.mean
    }

    /// Sample covariance, `d × d`.
    pub fn cov(&self) -> &Matrix<T> {
        &self.cov
    }

    /// Density at a `d × 1` point. Any other shape gives
    /// [`StatsError::DimensionMismatch`].
    pub fn pdf(&self, x: &Matrix<T>) -> Result<T, StatsError> {
        let d = self.mean.nrows();
        if x.shape() != (d, 1) {
            log::debug!(
                "MultiNormal::pdf: x must have the shape ({}, 1), got {:?}",
                d,
                x.shape()
            );
            return Err(StatsError::DimensionMismatch);
        }
        let diff = x - &self.mean;
        let quad = (&(&diff.transpose() * &self.cov_inv) * &diff)[(0, 0)];
        Ok((self.ln_norm - T::from(0.5).unwrap() * quad).exp())
    }
}
