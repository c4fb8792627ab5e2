pub(crate) mod laplace;
pub(crate) mod lu;
pub(crate) mod sylvester;
pub(crate) mod symmetric_eigen;


pub use laplace::{adjugate, cofactor, determinant, minor, SquareMatrix};
pub use lu::Lu;
pub use sylvester::{definiteness, Definiteness};

pub use crate::matrix::MatrixError;

/// Errors from the float factorizations.
///
/// The cofactor engine itself never returns this; only the LU paths
/// (`lu`, `inverse`, `solve`) can hit a zero pivot, and only
/// `symmetric_eigenvalues` iterates.
///
/// ```
/// use laplace::SquareMatrix;
/// use laplace::linalg::LinalgError;
///
/// let singular = SquareMatrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]).unwrap();
/// assert_eq!(singular.lu().unwrap_err(), LinalgError::Singular);
/// assert_eq!(singular.det(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    Singular,
    /// Iterative algorithm did not converge.
    ConvergenceFailure,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::ConvergenceFailure => write!(f, "iterative algorithm did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
