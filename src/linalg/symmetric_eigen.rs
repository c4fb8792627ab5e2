use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::{LinalgError, SquareMatrix};
use crate::traits::FloatScalar;

/// Householder tridiagonalization of a symmetric matrix held row-major in `w`.
///
/// On return `diag[0..n]` holds the diagonal and `off_diag[0..n-1]` the
/// sub-diagonal of the similar tridiagonal matrix. Only the lower triangle
/// of `w` is read; `w` is used as scratch.
fn tridiagonalize<T: FloatScalar>(w: &mut [T], n: usize, diag: &mut [T], off_diag: &mut [T]) {
    let two = T::one() + T::one();

    for k in 0..n.saturating_sub(2) {
        let sub_n = n - k - 1;

        let mut norm_sq = T::zero();
        for i in (k + 1)..n {
            let x = w[i * n + k];
            norm_sq = norm_sq + x * x;
        }
        if norm_sq == T::zero() {
            off_diag[k] = T::zero();
            continue;
        }

        let norm = norm_sq.sqrt();
        let x0 = w[(k + 1) * n + k];
        let sigma = if x0 < T::zero() { -norm } else { norm };

        // v = x + sigma e1, so (I - tau v v^T) x = -sigma e1
        let mut v = Vec::with_capacity(sub_n);
        v.push(x0 + sigma);
        for i in (k + 2)..n {
            v.push(w[i * n + k]);
        }
        let v_norm_sq = v.iter().fold(T::zero(), |s, &x| s + x * x);
        let tau = two / v_norm_sq;

        // p = tau * A_sub * v
        let p: Vec<T> = (0..sub_n)
            .map(|i| {
                let row = (k + 1 + i) * n + k + 1;
                tau * (0..sub_n).fold(T::zero(), |s, j| s + w[row + j] * v[j])
            })
            .collect();

        // q = p - (tau / 2)(v^T p) v
        let vtp = v.iter().zip(&p).fold(T::zero(), |s, (&a, &b)| s + a * b);
        let half_tau_vtp = tau / two * vtp;
        let q: Vec<T> = p.iter().zip(&v).map(|(&pi, &vi)| pi - half_tau_vtp * vi).collect();

        // A_sub -= v q^T + q v^T
        for i in 0..sub_n {
            let row = (k + 1 + i) * n + k + 1;
            for j in 0..sub_n {
                w[row + j] = w[row + j] - v[i] * q[j] - q[i] * v[j];
            }
        }

        off_diag[k] = -sigma;
    }

    for (i, d) in diag.iter_mut().enumerate().take(n) {
        *d = w[i * n + i];
    }
    if n >= 2 {
        off_diag[n - 2] = w[(n - 1) * n + (n - 2)];
    }
}

/// Implicit QR with Wilkinson shifts on a symmetric tridiagonal matrix.
///
/// `diag` is overwritten with the eigenvalues (ascending); `off_diag` is
/// destroyed.
fn tridiagonal_qr<T: FloatScalar>(
    diag: &mut [T],
    off_diag: &mut [T],
    max_iter: usize,
) -> Result<(), LinalgError> {
    let n = diag.len();
    if n <= 1 {
        return Ok(());
    }

    let two = T::one() + T::one();
    let eps = T::epsilon();
    let mut iter = 0usize;
    let mut hi = n - 1;

    while hi > 0 {
        let mut lo = hi;
        while lo > 0 {
            let threshold = eps * (diag[lo - 1].abs() + diag[lo].abs());
            if off_diag[lo - 1].abs() <= threshold {
                off_diag[lo - 1] = T::zero();
                break;
            }
            lo -= 1;
        }

        if lo == hi {
            hi -= 1;
            continue;
        }

        iter += 1;
        if iter > max_iter {
            return Err(LinalgError::ConvergenceFailure);
        }

        let d = (diag[hi - 1] - diag[hi]) / two;
        let e = off_diag[hi - 1];
        let r = (d * d + e * e).sqrt();
        let shift = diag[hi] - e * e / (d + if d >= T::zero() { r } else { -r });

        let mut x = diag[lo] - shift;
        let mut z = off_diag[lo];

        for k in lo..hi {
            let (c, s) = givens(x, z);

            if k > lo {
                off_diag[k - 1] = c * x + s * z;
            }

            let d_k = diag[k];
            let d_k1 = diag[k + 1];
            let e_k = off_diag[k];

            diag[k] = c * c * d_k + two * c * s * e_k + s * s * d_k1;
            diag[k + 1] = s * s * d_k - two * c * s * e_k + c * c * d_k1;
            off_diag[k] = c * s * (d_k1 - d_k) + (c * c - s * s) * e_k;

            if k + 1 < hi {
                let e_next = off_diag[k + 1];
                x = off_diag[k];
                z = s * e_next;
                off_diag[k + 1] = c * e_next;
            }
        }
    }

    diag.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    Ok(())
}

/// Givens rotation: `(c, s)` with `[c, s; -s, c] * [a; b] = [r; 0]`.
#[inline]
fn givens<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if b == T::zero() {
        (T::one(), T::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = T::one() / (T::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = T::one() / (T::one() + t * t).sqrt();
        (c, c * t)
    }
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// Eigenvalues of a symmetric matrix, ascending.
    ///
    /// Only the lower triangle is read. Householder tridiagonalization
    /// followed by implicit QR, so the cost is cubic in the dimension.
    /// Returns [`LinalgError::ConvergenceFailure`] if QR needs more than
    /// `30 n` sweeps.
    ///
    /// ```
    /// use laplace::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(&[[2.0_f64, -1.0], [-1.0, 2.0]]).unwrap();
    /// let ev = m.symmetric_eigenvalues().unwrap();
    /// assert!((ev[0] - 1.0).abs() < 1e-12);
    /// assert!((ev[1] - 3.0).abs() < 1e-12);
    /// ```
    pub fn symmetric_eigenvalues(&self) -> Result<Vec<T>, LinalgError> {
        let n = self.dim();
        let mut w = self.as_matrix().as_slice().to_vec();
        let mut diag = vec![T::zero(); n];
        let mut off_diag = vec![T::zero(); n.saturating_sub(1)];
        tridiagonalize(&mut w, n, &mut diag, &mut off_diag);
        tridiagonal_qr(&mut diag, &mut off_diag, 30 * n)?;
        Ok(diag)
    }
}
