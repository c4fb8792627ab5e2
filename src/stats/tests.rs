use alloc::vec;

use approx::assert_relative_eq;

use super::*;
use crate::matrix::Matrix;

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    let expected = 1.0 / (2.0 * core::f64::consts::PI).sqrt();
    assert_relative_eq!(n.pdf(0.0), expected, max_relative = 1e-14);
}

#[test]
fn normal_pdf_and_cdf_shifted() {
    let n = Normal::new(70.0_f64, 10.0).unwrap();
    assert_relative_eq!(n.pdf(90.0), 0.005399096651318806, max_relative = 1e-12);
    assert_relative_eq!(n.cdf(90.0), 0.9772498680518208, max_relative = 1e-13);
    // deep lower tail keeps its relative precision
    assert_relative_eq!(n.cdf(12.0), 3.315745978326164e-09, max_relative = 1e-10);
}

#[test]
fn normal_cdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert_relative_eq!(n.cdf(0.0), 0.5, epsilon = 1e-15);
    assert_relative_eq!(n.cdf(1.0), 0.8413447460685429, epsilon = 1e-13);
    assert_relative_eq!(n.cdf(-1.0), 0.15865525393145702, epsilon = 1e-13);
}

#[test]
fn normal_quantile() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!(n.quantile(0.5).abs() < 1e-8);
    assert!((n.quantile(0.975) - 1.959964).abs() < 1e-5);
    assert!((n.quantile(0.001) + 3.090232).abs() < 1e-5);
    assert!(n.quantile(0.0).is_infinite());
    assert!(n.quantile(1.0) > 0.0 && n.quantile(1.0).is_infinite());
}

#[test]
fn normal_quantile_inverts_cdf() {
    let n = Normal::new(-2.0_f64, 0.5).unwrap();
    for &p in &[0.01, 0.2, 0.5, 0.8, 0.99] {
        assert!((n.cdf(n.quantile(p)) - p).abs() < 1e-8);
    }
}

#[test]
fn normal_z_score_round_trip() {
    let n = Normal::new(70.0_f64, 10.0).unwrap();
    assert_eq!(n.z_score(70.0), 0.0);
    assert_eq!(n.z_score(55.0), -1.5);
    assert_relative_eq!(n.x_value(n.z_score(83.0)), 83.0, max_relative = 1e-15);
}

#[test]
fn normal_from_data() {
    let data: alloc::vec::Vec<f64> = (1..=10).map(f64::from).collect();
    let n = Normal::from_data(&data).unwrap();
    assert_relative_eq!(n.mean(), 5.5);
    assert_relative_eq!(n.stddev(), 2.8722813232690143, max_relative = 1e-14);
}

#[test]
fn normal_invalid() {
    assert_eq!(Normal::new(0.0_f64, 0.0), Err(StatsError::InvalidParameter));
    assert_eq!(Normal::new(0.0_f64, -1.0), Err(StatsError::InvalidParameter));
    assert_eq!(Normal::<f64>::from_data(&[1.0]), Err(StatsError::InsufficientData));
    assert_eq!(Normal::from_data(&[4.0, 4.0, 4.0]), Err(StatsError::InvalidParameter));
}

// ======================== Exponential ========================

#[test]
fn exponential_basics() {
    let e = Exponential::new(2.0_f64).unwrap();
    assert_relative_eq!(e.cdf(1.5), 0.950212931632136, max_relative = 1e-14);
    assert_relative_eq!(e.pdf(0.0), 2.0);
    assert_eq!(e.cdf(-0.1), 0.0);
    assert_eq!(e.pdf(-0.1), 0.0);
    assert!(e.ln_pdf(-0.1).is_infinite());
    assert_relative_eq!(e.variance(), 0.25);
    assert_relative_eq!(e.quantile(e.cdf(0.7)), 0.7, max_relative = 1e-12);
}

#[test]
fn exponential_from_data() {
    let e = Exponential::from_data(&[1.0_f64, 2.0, 3.0, 6.0]).unwrap();
    assert_relative_eq!(e.rate(), 1.0 / 3.0, max_relative = 1e-15);
    assert_eq!(Exponential::new(0.0_f64), Err(StatsError::InvalidParameter));
    assert_eq!(Exponential::<f64>::from_data(&[]), Err(StatsError::InsufficientData));
    assert_eq!(
        Exponential::from_data(&[-1.0_f64, -2.0]),
        Err(StatsError::InvalidParameter)
    );
}

// ======================== Poisson ========================

#[test]
fn poisson_pmf_cdf() {
    let p = Poisson::new(4.5_f64).unwrap();
    assert_relative_eq!(p.pmf(0), (-4.5_f64).exp(), max_relative = 1e-13);
    assert_relative_eq!(p.cdf(9), 0.9829072671006215, max_relative = 1e-12);
    assert_relative_eq!(p.ln_pmf(3), p.pmf(3).ln(), max_relative = 1e-13);
}

#[test]
fn poisson_pmf_sums_to_one() {
    let p = Poisson::new(3.0_f64).unwrap();
    let total: f64 = (0..60).map(|k| p.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
}

#[test]
fn poisson_from_data() {
    let p = Poisson::from_data(&[2.0_f64, 4.0, 3.0, 7.0]).unwrap();
    assert_relative_eq!(p.rate(), 4.0);
    assert_relative_eq!(p.variance(), 4.0);
    assert_eq!(Poisson::new(-1.0_f64), Err(StatsError::InvalidParameter));
    assert_eq!(Poisson::from_data(&[0.0_f64, 0.0]), Err(StatsError::InvalidParameter));
}

// ======================== Binomial ========================

#[test]
fn binomial_pmf_cdf() {
    let b = Binomial::new(30, 0.6_f64).unwrap();
    assert_relative_eq!(b.pmf(15), 0.07831220968608016, max_relative = 1e-11);
    assert_relative_eq!(b.cdf(15), 0.1753690535068292, max_relative = 1e-11);
    assert_eq!(b.pmf(31), 0.0);
    assert_eq!(b.cdf(30), 1.0);
    assert_eq!(b.cdf(100), 1.0);
    assert_relative_eq!(b.mean(), 18.0, max_relative = 1e-15);
    assert_relative_eq!(b.variance(), 7.2, max_relative = 1e-14);
}

#[test]
fn binomial_invalid() {
    assert_eq!(Binomial::new(0, 0.5_f64), Err(StatsError::InvalidParameter));
    assert_eq!(Binomial::new(10, 0.0_f64), Err(StatsError::InvalidParameter));
    assert_eq!(Binomial::new(10, 1.0_f64), Err(StatsError::InvalidParameter));
    // variance larger than the mean has no binomial fit
    assert_eq!(
        Binomial::from_data(&[0.0_f64, 10.0]),
        Err(StatsError::InvalidParameter)
    );
    assert_eq!(Binomial::<f64>::from_data(&[3.0]), Err(StatsError::InsufficientData));
}

// ======================== Multivariate ========================

#[test]
fn mean_cov_three_variables() {
    let x = Matrix::from_vec(
        4,
        3,
        vec![
            1.0_f64, 2.0, 0.0, //
            2.0, 4.0, 1.0, //
            3.0, 6.0, 0.0, //
            4.0, 8.0, 1.0,
        ],
    );
    let (mean, cov) = mean_cov(&x).unwrap();
    assert_eq!(mean.shape(), (1, 3));
    assert_eq!(mean.as_slice(), &[2.5, 5.0, 0.5]);
    assert_eq!(cov.shape(), (3, 3));
    let expected = [
        5.0 / 3.0, 10.0 / 3.0, 1.0 / 3.0,
        10.0 / 3.0, 20.0 / 3.0, 2.0 / 3.0,
        1.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0,
    ];
    for (a, b) in cov.as_slice().iter().zip(expected.iter()) {
        assert_relative_eq!(a, b, max_relative = 1e-14);
    }
}

#[test]
fn mean_cov_needs_two_rows() {
    let x = Matrix::from_vec(1, 3, vec![1.0_f64, 2.0, 3.0]);
    assert_eq!(mean_cov(&x).unwrap_err(), StatsError::InsufficientData);
}

#[test]
fn correlation_unit_diagonal() {
    let c = Matrix::from_vec(3, 3, vec![4.0_f64, 2.0, 0.6, 2.0, 9.0, 0.0, 0.6, 0.0, 1.0]);
    let r = correlation(&c).unwrap();
    for i in 0..3 {
        assert_relative_eq!(r[(i, i)], 1.0, max_relative = 1e-15);
    }
    assert_relative_eq!(r[(0, 1)], 2.0 / 6.0, max_relative = 1e-15);
    assert_relative_eq!(r[(0, 2)], 0.3, max_relative = 1e-15);
    assert_eq!(
        correlation(&Matrix::from_vec(1, 2, vec![1.0_f64, 2.0])).unwrap_err(),
        StatsError::DimensionMismatch
    );
}

#[test]
fn multinormal_pdf() {
    // Columns are observations; covariance [[5/3, 1], [1, 5/3]].
    let data = Matrix::from_vec(2, 4, vec![1.0_f64, 2.0, 3.0, 4.0, 2.0, 1.0, 4.0, 3.0]);
    let mn = MultiNormal::from_data(&data).unwrap();
    assert_eq!(mn.mean().shape(), (2, 1));
    assert_relative_eq!(mn.cov()[(0, 1)], 1.0, max_relative = 1e-14);

    // At the mean the density is 1 / (2π sqrt|Σ|), |Σ| = 16/9.
    let expected = 1.0 / (2.0 * core::f64::consts::PI * (16.0_f64 / 9.0).sqrt());
    assert_relative_eq!(mn.pdf(mn.mean()).unwrap(), expected, max_relative = 1e-12);

    // One step along (1, 0): quadratic form = Σ⁻¹[0][0] = (5/3)/(16/9) = 15/16.
    let x = Matrix::column_vector(vec![3.5, 2.5]);
    let at_x = expected * (-0.5_f64 * 15.0 / 16.0).exp();
    assert_relative_eq!(mn.pdf(&x).unwrap(), at_x, max_relative = 1e-12);
}

#[test]
fn multinormal_tiny_scale_data() {
    // Same shape as above, every value scaled by 1e-9: |Σ| = 16/9 * 1e-36.
    let data = Matrix::from_vec(
        2,
        4,
        vec![1e-9_f64, 2e-9, 3e-9, 4e-9, 2e-9, 1e-9, 4e-9, 3e-9],
    );
    let mn = MultiNormal::from_data(&data).unwrap();
    assert_relative_eq!(mn.cov()[(0, 0)], 5.0 / 3.0 * 1e-18, max_relative = 1e-12);

    let expected = 1e18 / (2.0 * core::f64::consts::PI * (16.0_f64 / 9.0).sqrt());
    assert_relative_eq!(mn.pdf(mn.mean()).unwrap(), expected, max_relative = 1e-10);
}

#[test]
fn multinormal_errors() {
    let one_obs = Matrix::from_vec(2, 1, vec![1.0_f64, 2.0]);
    assert_eq!(
        MultiNormal::from_data(&one_obs).unwrap_err(),
        StatsError::InsufficientData
    );

    // second variable is twice the first: singular covariance
    let collinear = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0]);
    assert_eq!(
        MultiNormal::from_data(&collinear).unwrap_err(),
        StatsError::SingularCovariance
    );

    let data = Matrix::from_vec(2, 4, vec![1.0_f64, 2.0, 3.0, 4.0, 2.0, 1.0, 4.0, 3.0]);
    let mn = MultiNormal::from_data(&data).unwrap();
    let row = Matrix::row_vector(vec![1.0, 2.0]);
    assert_eq!(mn.pdf(&row).unwrap_err(), StatsError::DimensionMismatch);
}

#[test]
fn error_display() {
    assert_eq!(
        alloc::format!("{}", StatsError::InsufficientData),
        "data must contain multiple values"
    );
}
