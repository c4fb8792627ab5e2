use crate::special::{erf, erfc};
use crate::traits::FloatScalar;

use super::{sample_moments, standard_normal_quantile, ContinuousDistribution, StatsError};

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// ```
/// use laplace::stats::{ContinuousDistribution, Normal};
///
/// let n = Normal::new(70.0_f64, 10.0).unwrap();
/// assert!((n.z_score(90.0) - 2.0).abs() < 1e-14);
/// assert!((n.x_value(-1.5) - 55.0).abs() < 1e-14);
/// assert!((n.quantile(0.975) - 89.6).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<T> {
    mu: T,
    sigma: T,
}

impl<T: FloatScalar> Normal<T> {
    /// Mean `mu`, standard deviation `sigma > 0`.
    pub fn new(mu: T, sigma: T) -> Result<Self, StatsError> {
        if sigma <= T::zero() {
            log::debug!("Normal::new: stddev must be positive, got {:?}", sigma);
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { mu, sigma })
    }

    /// Estimate from a sample: sample mean and population standard deviation.
    ///
    /// Fewer than two values gives [`StatsError::InsufficientData`]; a sample
    /// with no spread gives [`StatsError::InvalidParameter`].
    pub fn from_data(data: &[T]) -> Result<Self, StatsError> {
        let (mean, var) = sample_moments("Normal", data)?;
        Self::new(mean, var.sqrt())
    }

    /// Standard deviation σ.
    pub fn stddev(&self) -> T {
        self.sigma
    }

    /// Number of standard deviations `x` lies from the mean.
    pub fn z_score(&self, x: T) -> T {
        (x - self.mu) / self.sigma
    }

    /// Inverse of [`z_score`](Self::z_score).
    pub fn x_value(&self, z: T) -> T {
        self.mu + z * self.sigma
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Normal<T> {
    fn pdf(&self, x: T) -> T {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        let half = T::from(0.5).unwrap();
        let ln_sqrt_2pi = T::from(0.5 * num_traits::Float::ln(core::f64::consts::TAU)).unwrap();
        let z = self.z_score(x);
        -half * z * z - self.sigma.ln() - ln_sqrt_2pi
    }

    fn cdf(&self, x: T) -> T {
        let half = T::from(0.5).unwrap();
        let z = self.z_score(x) / T::from(core::f64::consts::SQRT_2).unwrap();
        // erfc keeps precision in the lower tail
        if z < T::zero() {
            half * erfc(-z)
        } else {
            half * (T::one() + erf(z))
        }
    }

    fn quantile(&self, p: T) -> T {
        self.x_value(standard_normal_quantile(p))
    }

    fn mean(&self) -> T {
        self.mu
    }

    fn variance(&self) -> T {
        self.sigma * self.sigma
    }
}
