//! # laplace
//!
//! Exact determinants, minors, cofactors and adjugates by cofactor (Laplace)
//! expansion, plus a handful of small numeric routines built on the same
//! matrix type. No-std compatible (with `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use laplace::{adjugate, cofactor, determinant, minor, MatrixError};
//!
//! let m = [[5, -2, 3], [1, 4, 0], [-1, 2, 6]];
//! assert_eq!(determinant(&m), Ok(150));
//! assert_eq!(minor(&m).unwrap().to_rows()[0], vec![24, 6, 6]);
//! assert_eq!(cofactor(&m).unwrap().to_rows()[0], vec![24, -6, 6]);
//! assert_eq!(adjugate(&m).unwrap().to_rows()[0], vec![24, 18, -12]);
//!
//! assert_eq!(determinant(&[[1, 2, 3]]), Err(MatrixError::InvalidShape));
//! ```
//!
//! ## Modules
//!
//! - [`linalg`] — the cofactor engine. [`determinant`], [`minor`],
//!   [`cofactor`] and [`adjugate`] take a slice of rows (arrays, `Vec`s or
//!   anything `AsRef<[T]>`); [`SquareMatrix`] is the validated form with the
//!   same operations as methods. Integer inputs give exact results. Also an
//!   opt-in LU path for floats (`det_lu`, `inverse`, `solve`), symmetric
//!   eigenvalues, and [`definiteness`] (Sylvester's criterion on small
//!   matrices, eigenvalue signs on larger ones).
//!
//! - [`matrix`] — heap-allocated, row-major `Matrix<T>` with runtime
//!   dimensions: construction, indexing, arithmetic, transpose, products,
//!   concatenation.
//!
//! - [`special`] — gamma, log-gamma and error functions.
//!
//! - [`stats`] — normal, exponential, Poisson and binomial distributions
//!   (from parameters or estimated from data), sample mean/covariance,
//!   correlation, and a multivariate normal.
//!
//! - [`bayes`] — likelihood, intersection, marginal and posterior over a grid
//!   of binomial success probabilities.
//!
//! - [`calculus`] — polynomial derivative and integral, closed-form sum of
//!   squares.
//!
//! - [`traits`] — element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`SignedScalar`] — elements closed under negation, required by the cofactor engine
//!   - [`FloatScalar`] — real floats, used by LU, statistics and special functions
//!
//! ## Errors
//!
//! Each module has its own `Copy` error enum with a `Display` impl (and
//! `std::error::Error` with the `std` feature): [`MatrixError`],
//! [`linalg::LinalgError`], [`stats::StatsError`], [`bayes::BayesError`].
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug!`
//! when a public entry point rejects its input, `trace!` on engine entry.
//! The library never installs a logger.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | (none)  | baseline | `no_std` + `alloc`, pure-Rust `libm` float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bayes;
pub mod calculus;
pub mod linalg;
pub mod matrix;
pub mod special;
pub mod stats;
pub mod traits;

pub use linalg::{adjugate, cofactor, definiteness, determinant, minor, Definiteness, SquareMatrix};
pub use matrix::{Axis, Matrix, MatrixError};
pub use traits::{FloatScalar, Scalar, SignedScalar};
