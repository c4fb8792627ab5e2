//! Probability distributions and multivariate sample statistics.
//!
//! Each distribution implements [`ContinuousDistribution`] or
//! [`DiscreteDistribution`], and can be built from explicit parameters
//! (`new`) or estimated from a sample (`from_data`).
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Exponential`] | rate λ | [0, ∞) |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`MultiNormal`] | mean μ (d×1), covariance Σ (d×d) | ℝ^d |
//!
//! ```
//! use laplace::stats::{ContinuousDistribution, Normal};
//!
//! let n = Normal::from_data(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert!((n.mean() - 3.0).abs() < 1e-14);
//! assert!((n.cdf(3.0) - 0.5).abs() < 1e-14);
//! ```

mod binomial;
mod exponential;
mod multivariate;
mod normal;
mod poisson;

#[cfg(test)]
mod tests;

pub use binomial::Binomial;
pub use exponential::Exponential;
pub use multivariate::{correlation, mean_cov, MultiNormal};
pub use normal::Normal;
pub use poisson::Poisson;

use crate::traits::FloatScalar;

/// Errors from distribution construction and sample statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter, given or estimated, is out of its valid range.
    InvalidParameter,
    /// Fewer than two observations.
    InsufficientData,
    /// An input matrix has the wrong shape.
    DimensionMismatch,
    /// The estimated covariance matrix cannot be inverted.
    SingularCovariance,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => write!(f, "distribution parameter out of valid range"),
            StatsError::InsufficientData => write!(f, "data must contain multiple values"),
            StatsError::DimensionMismatch => write!(f, "input has the wrong shape"),
            StatsError::SingularCovariance => write!(f, "covariance matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Continuous probability distribution.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the density.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Inverse of [`cdf`](Self::cdf) on (0, 1).
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// Discrete probability distribution over the non-negative integers.
pub trait DiscreteDistribution<T> {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> T;
    /// Natural log of the mass function.
    fn ln_pmf(&self, k: u64) -> T;
    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

// ---------------------------------------------------------------------------
// Sample moments shared by the `from_data` constructors.
// ---------------------------------------------------------------------------

/// Mean and population variance (divisor `n`). Needs at least two values.
pub(crate) fn sample_moments<T: FloatScalar>(
    name: &str,
    data: &[T],
) -> Result<(T, T), StatsError> {
    if data.len() < 2 {
        log::debug!("{}::from_data: {} value(s), need at least 2", name, data.len());
        return Err(StatsError::InsufficientData);
    }
    let n = T::from(data.len()).unwrap();
    let mean = data.iter().fold(T::zero(), |acc, &x| acc + x) / n;
    let var = data
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - mean) * (x - mean))
        / n;
    Ok((mean, var))
}

// ---------------------------------------------------------------------------
// Standard normal quantile (Acklam). Relative error below 1.2e-9 on (0, 1).
// ---------------------------------------------------------------------------

const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ACKLAM_B: [f64; 6] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
    1.0,
];
const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ACKLAM_D: [f64; 5] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
    1.0,
];

/// Polynomial with coefficients from the highest power down.
fn horner<T: FloatScalar>(coefs: &[f64], x: T) -> T {
    coefs
        .iter()
        .fold(T::zero(), |acc, &k| acc * x + T::from(k).unwrap())
}

pub(crate) fn standard_normal_quantile<T: FloatScalar>(p: T) -> T {
    let one = T::one();
    if p <= T::zero() {
        return T::neg_infinity();
    }
    if p >= one {
        return T::infinity();
    }
    let tail = T::from(0.02425).unwrap();
    let two = one + one;

    if p < tail || p > one - tail {
        let lower = if p < tail { p } else { one - p };
        let q = (-two * lower.ln()).sqrt();
        let z = horner(&ACKLAM_C, q) / horner(&ACKLAM_D, q);
        if p < tail {
            z
        } else {
            -z
        }
    } else {
        let q = p - T::from(0.5).unwrap();
        let r = q * q;
        q * horner(&ACKLAM_A, r) / horner(&ACKLAM_B, r)
    }
}
