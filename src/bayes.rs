//! Bayesian updates over a grid of hypothetical success probabilities.
//!
//! Data are `x` successes in `n` Bernoulli trials; `p` holds candidate
//! success probabilities and `prior` the belief in each. All four functions
//! share one validation pass, checked in this order:
//!
//! 1. `n` is positive ([`BayesError::InvalidTrials`])
//! 2. `x <= n` ([`BayesError::SuccessesExceedTrials`])
//! 3. `prior` has the same length as `p` ([`BayesError::ShapeMismatch`])
//! 4. every `p` lies in `[0, 1]` ([`BayesError::ProbabilityOutOfRange`])
//! 5. every prior lies in `[0, 1]` ([`BayesError::PriorOutOfRange`])
//! 6. the prior sums to one within `1e-8 + 1e-5` ([`BayesError::PriorNotNormalized`])
//!
//! ```
//! use laplace::bayes::posterior;
//!
//! let p = [0.0_f64, 0.25, 0.5, 0.75, 1.0];
//! let prior = [0.2; 5];
//! let post = posterior(26, 130, &p, &prior).unwrap();
//! assert!((post.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! assert!(post[1] > post[2]);
//! ```

use alloc::vec::Vec;

use crate::special::ln_choose;
use crate::traits::FloatScalar;

/// Errors from the Bayesian update functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayesError {
    InvalidTrials,
    SuccessesExceedTrials,
    ProbabilityOutOfRange,
    PriorOutOfRange,
    ShapeMismatch,
    PriorNotNormalized,
}

impl core::fmt::Display for BayesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BayesError::InvalidTrials => write!(f, "n must be a positive integer"),
            BayesError::SuccessesExceedTrials => write!(f, "x cannot be greater than n"),
            BayesError::ProbabilityOutOfRange => {
                write!(f, "all values in P must be in the range [0, 1]")
            }
            BayesError::PriorOutOfRange => write!(f, "all values in Pr must be in the range [0, 1]"),
            BayesError::ShapeMismatch => write!(f, "Pr must have the same shape as P"),
            BayesError::PriorNotNormalized => write!(f, "Pr must sum to 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BayesError {}

fn in_unit_interval<T: FloatScalar>(v: T) -> bool {
    v >= T::zero() && v <= T::one()
}

fn check_data(x: u64, n: u64) -> Result<(), BayesError> {
    if n == 0 {
        log::debug!("bayes: n must be positive");
        return Err(BayesError::InvalidTrials);
    }
    if x > n {
        log::debug!("bayes: x = {} exceeds n = {}", x, n);
        return Err(BayesError::SuccessesExceedTrials);
    }
    Ok(())
}

fn check_prior<T: FloatScalar>(x: u64, n: u64, p: &[T], prior: &[T]) -> Result<(), BayesError> {
    check_data(x, n)?;
    if prior.len() != p.len() {
        log::debug!("bayes: {} priors for {} probabilities", prior.len(), p.len());
        return Err(BayesError::ShapeMismatch);
    }
    if !p.iter().all(|&v| in_unit_interval(v)) {
        return Err(BayesError::ProbabilityOutOfRange);
    }
    if !prior.iter().all(|&v| in_unit_interval(v)) {
        return Err(BayesError::PriorOutOfRange);
    }
    let total = prior.iter().fold(T::zero(), |acc, &v| acc + v);
    let atol = T::from(1e-8).unwrap();
    let rtol = T::from(1e-5).unwrap();
    if (total - T::one()).abs() > atol + rtol {
        log::debug!("bayes: prior sums to {:?}", total);
        return Err(BayesError::PriorNotNormalized);
    }
    Ok(())
}

fn binomial_likelihood<T: FloatScalar>(x: u64, n: u64, p: &[T]) -> Vec<T> {
    let ln_c = ln_choose::<T>(n, x);
    let k = T::from(x).unwrap();
    let rest = T::from(n - x).unwrap();
    p.iter()
        .map(|&pi| {
            // 0^0 = 1 at the edges of the grid
            let succ = if x == 0 { T::zero() } else { k * pi.ln() };
            let fail = if x == n { T::zero() } else { rest * (-pi).ln_1p() };
            (ln_c + succ + fail).exp()
        })
        .collect()
}

/// Probability of `x` successes in `n` trials under each probability in `p`.
///
/// ```
/// use laplace::bayes::likelihood;
///
/// let l = likelihood(26, 130, &[0.0_f64, 0.1, 0.2]).unwrap();
/// assert_eq!(l[0], 0.0);
/// assert!((l[2] - 0.08718000699012038).abs() < 1e-12);
/// ```
pub fn likelihood<T: FloatScalar>(x: u64, n: u64, p: &[T]) -> Result<Vec<T>, BayesError> {
    check_data(x, n)?;
    if !p.iter().all(|&v| in_unit_interval(v)) {
        return Err(BayesError::ProbabilityOutOfRange);
    }
    Ok(binomial_likelihood(x, n, p))
}

/// Joint probability of the data and each hypothesis: likelihood × prior.
pub fn intersection<T: FloatScalar>(
    x: u64,
    n: u64,
    p: &[T],
    prior: &[T],
) -> Result<Vec<T>, BayesError> {
    check_prior(x, n, p, prior)?;
    Ok(joint(x, n, p, prior))
}

fn joint<T: FloatScalar>(x: u64, n: u64, p: &[T], prior: &[T]) -> Vec<T> {
    binomial_likelihood(x, n, p)
        .into_iter()
        .zip(prior)
        .map(|(l, &pr)| l * pr)
        .collect()
}

/// Marginal probability of the data: sum of the [`intersection`].
pub fn marginal<T: FloatScalar>(x: u64, n: u64, p: &[T], prior: &[T]) -> Result<T, BayesError> {
    check_prior(x, n, p, prior)?;
    Ok(joint(x, n, p, prior)
        .into_iter()
        .fold(T::zero(), |acc, v| acc + v))
}

/// Posterior belief in each hypothesis: intersection / marginal.
///
/// A zero marginal (the data are impossible under every hypothesis with
/// prior weight) propagates as NaN.
pub fn posterior<T: FloatScalar>(
    x: u64,
    n: u64,
    p: &[T],
    prior: &[T],
) -> Result<Vec<T>, BayesError> {
    check_prior(x, n, p, prior)?;
    let joint = joint(x, n, p, prior);
    let total = joint.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(joint.into_iter().map(|v| v / total).collect())
}
