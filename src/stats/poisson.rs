use crate::special::lgamma;
use crate::traits::FloatScalar;

use super::{sample_moments, DiscreteDistribution, StatsError};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k!
///
/// ```
/// use laplace::stats::{DiscreteDistribution, Poisson};
///
/// let p = Poisson::new(4.5_f64).unwrap();
/// assert!((p.pmf(9) - 0.023164579582659155).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Rate `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if lambda <= T::zero() {
            log::debug!("Poisson::new: rate must be positive, got {:?}", lambda);
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Estimate λ as the sample mean.
    pub fn from_data(data: &[T]) -> Result<Self, StatsError> {
        let (mean, _) = sample_moments("Poisson", data)?;
        Self::new(mean)
    }

    /// Rate λ.
    pub fn rate(&self) -> T {
        self.lambda
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        let kf = T::from(k).unwrap();
        kf * self.lambda.ln() - self.lambda - lgamma(kf + T::one())
    }

    /// Sum of the mass function over `0..=k`.
    fn cdf(&self, k: u64) -> T {
        (0..=k).fold(T::zero(), |acc, i| acc + self.pmf(i))
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }
}
