//! Jacobi solver scenarios: the n = 6 demonstration system, boundary and error
//! cases, and comparisons against a direct solve and a random-walk estimate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spjacobi::core::wrappers::residual_norm_inf;
use spjacobi::error::JError;
use spjacobi::matrix::{DenseMatrix, SparseMatrix};
use spjacobi::solver::{JacobiFlags, JacobiSolver, LinearSolver, LuSolver};
use spjacobi::utils::random_walk::simulate_walk;
use spjacobi::utils::system::{exact_path_solution, unit_rhs};

/// 20 sweeps on the n = 6 system from zero. Every value is a dyadic fraction,
/// so the result is exact and pinned as a regression baseline.
#[test]
fn demo_system_baseline() {
    let n = 6;
    let m = DenseMatrix::new(n).unwrap();
    let b = unit_rhs(n).unwrap();
    let mut x = vec![0.0; n];
    let stats = JacobiSolver::new(20).solve(&m, &b, &mut x).unwrap();
    assert_eq!(stats.iterations, 20);
    assert!(!stats.converged);
    assert_eq!(
        x,
        vec![
            1.0,
            0.7942295074462891,
            0.5884590148925781,
            0.39066314697265625,
            0.19286727905273438,
            0.0
        ]
    );
    let r = residual_norm_inf(&m, &x, &b).unwrap();
    assert_relative_eq!(r, 0.003987312316894531, epsilon = 1e-15);
}

/// The residual keeps shrinking; the demo system drops below 1e-3 by sweep 27.
#[test]
fn demo_system_residual_decreases() {
    let n = 6;
    let m = SparseMatrix::new(n).unwrap();
    let b = unit_rhs(n).unwrap();
    let mut x = vec![0.0; n];
    let stats = JacobiSolver::new(30)
        .with_flags(JacobiFlags::MONITOR_RESIDUAL)
        .solve(&m, &b, &mut x)
        .unwrap();
    assert!(stats.history[19] < 5e-3);
    assert!(stats.history[26] < 1e-3);
    assert!(stats.history.windows(2).skip(2).all(|w| w[1] <= w[0]));
}

/// n = 1: the single identity equation is solved by the first sweep.
#[test]
fn single_unknown() {
    for k in [1, 2, 10] {
        let mut x = vec![0.0];
        JacobiSolver::new(k).solve(&DenseMatrix::new(1).unwrap(), &vec![1.0], &mut x).unwrap();
        assert_eq!(x, vec![1.0]);
    }
}

/// A right-hand side of the wrong length fails before any sweep.
#[test]
fn rhs_length_mismatch() {
    let m = DenseMatrix::new(6).unwrap();
    let mut x = vec![0.0; 6];
    let err = JacobiSolver::new(20)
        .with_flags(JacobiFlags::MONITOR_RESIDUAL)
        .solve(&m, &vec![1.0, 0.0, 0.0, 0.0, 0.0], &mut x)
        .unwrap_err();
    assert_eq!(err, JError::DimensionMismatch { what: "b", expected: 6, found: 5 });
    assert_eq!(x, vec![0.0; 6]);
}

/// A guess of the wrong length fails the same way on the sparse path.
#[test]
fn guess_length_mismatch() {
    let m = SparseMatrix::new(6).unwrap();
    let mut x = vec![0.0; 7];
    let err = JacobiSolver::new(20).solve(&m, &unit_rhs(6).unwrap(), &mut x).unwrap_err();
    assert!(matches!(err, JError::DimensionMismatch { what: "x", expected: 6, found: 7 }));
}

/// Lengths are validated before the diagonal scan, so a short rhs against an
/// empty sparse matrix reports the mismatch rather than a zero diagonal.
#[test]
fn sparse_length_checked_before_diagonal() {
    let m = SparseMatrix::empty(6).unwrap();
    let mut x = vec![0.0; 6];
    let err = JacobiSolver::new(20).solve_sparse(&m, &[1.0; 5], &mut x).unwrap_err();
    assert!(matches!(err, JError::DimensionMismatch { what: "b", expected: 6, found: 5 }));

    let mut long = vec![0.0; 7];
    let err = JacobiSolver::new(20).solve_sparse(&m, &[1.0; 6], &mut long).unwrap_err();
    assert!(matches!(err, JError::DimensionMismatch { what: "x", expected: 6, found: 7 }));
}

/// Skipping initialization leaves an all-zero matrix; the first divide fails at row 0.
#[test]
fn uninitialized_matrix_is_singular() {
    let m = DenseMatrix::zeros(6).unwrap();
    let mut x = vec![0.0; 6];
    let err = JacobiSolver::new(20).solve(&m, &unit_rhs(6).unwrap(), &mut x).unwrap_err();
    assert_eq!(err, JError::SingularDiagonal(0));

    let s = SparseMatrix::empty(6).unwrap();
    let err = JacobiSolver::new(20).solve(&s, &unit_rhs(6).unwrap(), &mut x).unwrap_err();
    assert_eq!(err, JError::SingularDiagonal(0));
}

/// With a generous budget the iterate matches a direct LU solve of the same system.
#[test]
fn converged_iterate_matches_direct_lu() {
    let n = 10;
    let m = DenseMatrix::new(n).unwrap();
    let b = unit_rhs(n).unwrap();
    let mut x = vec![0.0; n];
    let stats = JacobiSolver::new(5000).with_tol(1e-13).solve(&m, &b, &mut x).unwrap();
    assert!(stats.converged);

    let mut x_direct = vec![0.0; n];
    let direct = LuSolver::new().solve(&m, &b, &mut x_direct).unwrap();
    assert_eq!(direct.iterations, 1);
    for i in 0..n {
        assert_abs_diff_eq!(x[i], x_direct[i], epsilon = 1e-10);
    }
}

/// The closed-form absorption probabilities, a long sparse run, and a
/// seeded random-walk estimate all agree.
#[test]
fn matches_random_walk_estimate() {
    let n = 7;
    let s = SparseMatrix::new(n).unwrap();
    let b = unit_rhs(n).unwrap();
    let mut x = vec![0.0; n];
    JacobiSolver::new(2000).solve(&s, &b, &mut x).unwrap();
    let exact = exact_path_solution(n).unwrap();
    assert_relative_eq!(x.as_slice(), exact.as_slice(), epsilon = 1e-12);

    let mut rng = StdRng::seed_from_u64(42);
    let p = simulate_walk(n, 2, 20_000, &mut rng).unwrap();
    assert!((p - x[2]).abs() < 0.02, "walk estimate {} vs jacobi {}", p, x[2]);
}
