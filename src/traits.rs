use core::fmt::Debug;
use core::ops::Neg;

use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Matrix elements closed under negation.
///
/// Required by the cofactor engine: the alternating signs of a Laplace
/// expansion are not representable in unsigned integers. Covers `f32`, `f64`
/// and the signed integer types, so integer determinants stay exact.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

impl<T: Scalar + Neg<Output = T>> SignedScalar for T {}

/// Trait for floating-point elements.
///
/// Required by anything that needs `sqrt`, `exp`, `ln` or a tolerance:
/// LU factorization, definiteness, distributions, special functions.
pub trait FloatScalar: SignedScalar + Float {}

impl<T: SignedScalar + Float> FloatScalar for T {}
