use crate::special::ln_choose;
use crate::traits::FloatScalar;

use super::{sample_moments, DiscreteDistribution, StatsError};

/// Binomial distribution: successes in `n` independent trials, each with
/// success probability `p`.
///
/// ```
/// use laplace::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.pmf(5) - 0.24609375).abs() < 1e-12);
/// assert_eq!(b.cdf(10), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// `n >= 1` trials with success probability `0 < p < 1`.
    pub fn new(n: u64, p: T) -> Result<Self, StatsError> {
        if n == 0 {
            log::debug!("Binomial::new: n must be positive");
            return Err(StatsError::InvalidParameter);
        }
        if p <= T::zero() || p >= T::one() {
            log::debug!("Binomial::new: p must be in (0, 1), got {:?}", p);
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { n, p })
    }

    /// Method-of-moments estimate.
    ///
    /// From `mean = np` and `var = np(1 − p)`: `p = 1 − var/mean`, then
    /// `n = round(mean/p)` and `p` is recomputed as `mean/n`.
    ///
    /// ```
    /// use laplace::stats::Binomial;
    ///
    /// let data = [3.0_f64, 5.0, 4.0, 6.0, 5.0, 4.0, 3.0, 6.0, 5.0, 4.0];
    /// let b = Binomial::from_data(&data).unwrap();
    /// assert_eq!(b.trials(), 6);
    /// assert!((b.p() - 0.75).abs() < 1e-12);
    /// ```
    pub fn from_data(data: &[T]) -> Result<Self, StatsError> {
        let (mean, var) = sample_moments("Binomial", data)?;
        if mean <= T::zero() {
            log::debug!("Binomial::from_data: sample mean must be positive");
            return Err(StatsError::InvalidParameter);
        }
        let p_est = T::one() - var / mean;
        if p_est <= T::zero() {
            log::debug!("Binomial::from_data: variance exceeds mean, no valid p");
            return Err(StatsError::InvalidParameter);
        }
        let n = (mean / p_est)
            .round()
            .to_u64()
            .ok_or(StatsError::InvalidParameter)?;
        if n == 0 {
            return Err(StatsError::InvalidParameter);
        }
        Self::new(n, mean / T::from(n).unwrap())
    }

    /// Number of trials `n`.
    pub fn trials(&self) -> u64 {
        self.n
    }

    /// Success probability `p`.
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::zero();
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::neg_infinity();
        }
        let kf = T::from(k).unwrap();
        let rest = T::from(self.n - k).unwrap();
        ln_choose::<T>(self.n, k) + kf * self.p.ln() + rest * (-self.p).ln_1p()
    }

    /// Sum of the mass function over `0..=k`; exactly `1` once `k >= n`.
    fn cdf(&self, k: u64) -> T {
        if k >= self.n {
            return T::one();
        }
        (0..=k).fold(T::zero(), |acc, i| acc + self.pmf(i))
    }

    fn mean(&self) -> T {
        T::from(self.n).unwrap() * self.p
    }

    fn variance(&self) -> T {
        T::from(self.n).unwrap() * self.p * (T::one() - self.p)
    }
}
