use crate::traits::FloatScalar;

use super::{sample_moments, ContinuousDistribution, StatsError};

/// Exponential distribution with rate λ.
///
/// f(x) = λ e^{−λx} for x ≥ 0, and zero below.
///
/// ```
/// use laplace::stats::{ContinuousDistribution, Exponential};
///
/// let e = Exponential::new(2.0_f64).unwrap();
/// assert!((e.mean() - 0.5).abs() < 1e-14);
/// assert_eq!(e.pdf(-1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T> {
    lambda: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Rate `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if lambda <= T::zero() {
            log::debug!("Exponential::new: rate must be positive, got {:?}", lambda);
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Estimate λ as the reciprocal of the sample mean.
    pub fn from_data(data: &[T]) -> Result<Self, StatsError> {
        let (mean, _) = sample_moments("Exponential", data)?;
        Self::new(mean.recip())
    }

    /// Rate λ.
    pub fn rate(&self) -> T {
        self.lambda
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Exponential<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        self.lambda * (-self.lambda * x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        self.lambda.ln() - self.lambda * x
    }

    fn cdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        -(-self.lambda * x).exp_m1()
    }

    fn quantile(&self, p: T) -> T {
        -(-p).ln_1p() / self.lambda
    }

    fn mean(&self) -> T {
        self.lambda.recip()
    }

    fn variance(&self) -> T {
        (self.lambda * self.lambda).recip()
    }
}
