use approx::assert_relative_eq;
use laplace::linalg::LinalgError;
use laplace::{adjugate, cofactor, determinant, minor, Matrix, MatrixError, SquareMatrix};

// ── Reference scenarios ──────────────────────────────────────────────

#[test]
fn example_family_three_by_three() {
    let m = vec![vec![1, 1, 1], vec![1, 1, 0], vec![0, 1, 1]];

    assert_eq!(determinant(&m), Ok(1));
    assert_eq!(
        minor(&m).unwrap().to_rows(),
        vec![vec![1, 1, 1], vec![0, 1, 1], vec![-1, -1, 0]]
    );
    assert_eq!(
        cofactor(&m).unwrap().to_rows(),
        vec![vec![1, -1, 1], vec![0, 1, -1], vec![-1, 1, 0]]
    );
    assert_eq!(
        adjugate(&m).unwrap().to_rows(),
        vec![vec![1, 0, -1], vec![-1, 1, 1], vec![1, -1, 0]]
    );
}

#[test]
fn accepts_arrays_vecs_and_slices() {
    let arrays = [[2, 1], [7, 4]];
    let vecs = vec![vec![2, 1], vec![7, 4]];
    let slices: [&[i32]; 2] = [&[2, 1], &[7, 4]];

    assert_eq!(determinant(&arrays), Ok(1));
    assert_eq!(determinant(&vecs), Ok(1));
    assert_eq!(determinant(&slices), Ok(1));
}

#[test]
fn float_determinant() {
    let m = [[0.5, 1.25, -2.0], [3.0, 0.0, 1.0], [-1.5, 2.0, 4.0]];
    // 0.5*(0-2) - 1.25*(12+1.5) + (-2)*(6-0)
    assert_relative_eq!(determinant(&m).unwrap(), -1.0 - 16.875 - 12.0, epsilon = 1e-12);
}

#[test]
fn five_by_five_upper_triangular() {
    let m = [
        [2, 9, -3, 4, 1],
        [0, -1, 7, 2, 8],
        [0, 0, 3, 5, -6],
        [0, 0, 0, 4, 2],
        [0, 0, 0, 0, -2],
    ];
    assert_eq!(determinant(&m), Ok(2 * -1 * 3 * 4 * -2));
}

#[test]
fn wide_integers_hold_large_products() {
    let big = i64::MAX as i128;
    let m = [[big, 2], [3, 4]];
    assert_eq!(determinant(&m), Ok(4 * big - 6));

    let m = [[big, 0, 0], [0, big, 0], [0, 0, -1]];
    assert_eq!(determinant(&m), Ok(-(big * big)));
}

// ── Error surface ────────────────────────────────────────────────────

#[test]
fn determinant_edge_cases() {
    let no_rows: Vec<Vec<i64>> = Vec::new();
    let zero_by_zero: Vec<Vec<i64>> = vec![vec![]];
    let one_by_two: Vec<Vec<i64>> = vec![vec![1, 2]];
    let two_by_one: Vec<Vec<i64>> = vec![vec![1], vec![2]];

    assert_eq!(determinant(&no_rows), Err(MatrixError::InvalidType));
    assert_eq!(determinant(&zero_by_zero), Ok(1));
    assert_eq!(determinant(&one_by_two), Err(MatrixError::InvalidShape));
    assert_eq!(determinant(&two_by_one), Err(MatrixError::InvalidShape));
}

#[test]
fn derived_operations_reject_empty_input() {
    let no_rows: Vec<Vec<i64>> = Vec::new();
    let zero_by_zero: Vec<Vec<i64>> = vec![vec![]];

    for rows in [&no_rows, &zero_by_zero] {
        assert_eq!(minor(rows), Err(MatrixError::InvalidShape));
        assert_eq!(cofactor(rows), Err(MatrixError::InvalidShape));
        assert_eq!(adjugate(rows), Err(MatrixError::InvalidShape));
    }
}

#[test]
fn errors_are_std_errors() {
    fn boxed(e: impl std::error::Error + 'static) -> Box<dyn std::error::Error> {
        Box::new(e)
    }
    assert_eq!(
        boxed(MatrixError::InvalidShape).to_string(),
        "matrix must be a non-empty square matrix"
    );
    assert_eq!(boxed(LinalgError::Singular).to_string(), "matrix is singular");
}

// ── SquareMatrix and LU ──────────────────────────────────────────────

#[test]
fn square_matrix_from_general_matrix() {
    let m = Matrix::from_fn(3, 3, |i, j| (i as i64 + 1) * (j as i64 + 2) - (i * j) as i64);
    let sq = SquareMatrix::try_from(m.clone()).unwrap();
    assert_eq!(sq.det(), determinant(&m.to_rows()).unwrap());
    assert_eq!(sq.adjugate().into_matrix(), adjugate(&m.to_rows()).unwrap());
}

#[test]
fn lu_and_laplace_agree() {
    let rows = [
        [4.0, -2.0, 1.0, 3.0],
        [3.0, 6.0, -4.0, 2.0],
        [2.0, 1.0, 8.0, -5.0],
        [1.0, -3.0, 2.0, 7.0],
    ];
    let sq = SquareMatrix::from_rows(&rows).unwrap();
    assert_relative_eq!(sq.det_lu(), sq.det(), max_relative = 1e-12);

    let inv = sq.inverse().unwrap();
    let via_adj = sq.adjugate().into_matrix() / sq.det();
    for (a, b) in inv.as_slice().iter().zip(via_adj.as_slice()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn singular_matrix_paths() {
    let sq = SquareMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(sq.det(), 0.0);
    assert_eq!(sq.det_lu(), 0.0);
    assert_eq!(sq.inverse().unwrap_err(), LinalgError::Singular);
    assert_eq!(sq.solve(&[1.0, 2.0]).unwrap_err(), LinalgError::Singular);
}
