//! Direct dense solve using Faer: LU with full pivoting.
//!
//! Used as the reference answer the Jacobi iterate is measured against. The
//! sparse backend is materialized to dense first, so this is only meant for
//! small and medium systems.
//!
//! # References
//! - Faer documentation: https://github.com/sarah-ek/faer-rs
//! - Golub & Van Loan, Matrix Computations

use faer::linalg::solvers::{FullPivLu, SolveCore};
use faer::{Conj, MatMut};
use tracing::{debug, warn};

use crate::core::traits::MatrixView;
use crate::core::wrappers::check_len;
use crate::error::JError;
use crate::matrix::{Backend, DenseMatrix, SparseMatrix};
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;

/// LU solver using full pivoting from Faer.
///
/// Stores the LU factorization for reuse.
pub struct LuSolver {
    /// Cached LU factorization (if computed)
    factor: Option<FullPivLu<f64>>,
}

impl LuSolver {
    /// Create a new LU solver (no factorization yet).
    pub fn new() -> Self {
        LuSolver { factor: None }
    }

    /// Factorize `a`, replacing any cached factor.
    pub fn factorize(&mut self, a: &DenseMatrix) {
        debug!(n = a.size(), "lu factorize");
        self.factor = Some(FullPivLu::new(a.as_faer()));
    }

    /// Solve with the cached factorization, writing the result into `x`.
    ///
    /// Fails with `Unsupported` before any factorization, and with
    /// `SingularMatrix` if the solve produced a non-finite entry.
    pub fn solve_cached(&self, b: &[f64], x: &mut [f64]) -> Result<(), JError> {
        let factor = self
            .factor
            .as_ref()
            .ok_or(JError::Unsupported("LuSolver: solve_cached called before factorization"))?;
        let n = b.len();
        check_len("x", n, x.len())?;
        x.copy_from_slice(b);
        let x_mat = MatMut::from_column_major_slice_mut(x, n, 1);
        factor.solve_in_place_with_conj(Conj::No, x_mat);
        if x.iter().any(|v| !v.is_finite()) {
            warn!("lu: non-finite solution");
            return Err(JError::SingularMatrix);
        }
        Ok(())
    }

    fn solve_dense(&mut self, a: &DenseMatrix, b: &[f64], x: &mut [f64]) -> Result<SolveStats<f64>, JError> {
        let n = a.size();
        check_len("b", n, b.len())?;
        check_len("x", n, x.len())?;
        self.factorize(a);
        // keep the caller's x untouched on failure
        let mut out = vec![0.0; n];
        self.solve_cached(b, &mut out)?;
        x.copy_from_slice(&out);
        // direct solve: one step, always converged
        Ok(SolveStats { iterations: 1, final_update: 0.0, converged: true, history: Vec::new() })
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSolver<DenseMatrix, Vec<f64>> for LuSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &DenseMatrix, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        self.solve_dense(a, b, x)
    }
}

impl LinearSolver<SparseMatrix, Vec<f64>> for LuSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &SparseMatrix, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        self.solve_dense(&a.to_dense()?, b, x)
    }
}

impl LinearSolver<Backend, Vec<f64>> for LuSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &Backend, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        match a {
            Backend::Dense(m) => self.solve(m, b, x),
            Backend::Sparse(m) => self.solve(m, b, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::system::{exact_path_solution, unit_rhs};
    use approx::assert_abs_diff_eq;

    #[test]
    fn lu_solves_path_system() {
        let n = 9;
        let a = DenseMatrix::new(n).unwrap();
        let mut x = vec![0.0; n];
        let stats = LuSolver::new().solve(&a, &unit_rhs(n).unwrap(), &mut x).unwrap();
        assert!(stats.converged);
        assert_eq!(stats.iterations, 1);
        let exact = exact_path_solution(n).unwrap();
        for i in 0..n {
            assert_abs_diff_eq!(x[i], exact[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn sparse_goes_through_dense() {
        let n = 6;
        let mut xs = vec![0.0; n];
        let mut xd = vec![0.0; n];
        let b = unit_rhs(n).unwrap();
        LuSolver::new().solve(&SparseMatrix::new(n).unwrap(), &b, &mut xs).unwrap();
        LuSolver::new().solve(&DenseMatrix::new(n).unwrap(), &b, &mut xd).unwrap();
        assert_eq!(xs, xd);
    }

    #[test]
    fn cached_solve_requires_factor() {
        let lu = LuSolver::new();
        let mut x = vec![0.0; 2];
        assert!(matches!(lu.solve_cached(&[1.0, 0.0], &mut x), Err(JError::Unsupported(_))));
    }

    #[test]
    fn singular_matrix_is_reported() {
        let a = DenseMatrix::zeros(3).unwrap();
        let mut x = vec![7.0; 3];
        let err = LuSolver::new().solve(&a, &vec![1.0, 0.0, 0.0], &mut x).unwrap_err();
        assert_eq!(err, JError::SingularMatrix);
        assert_eq!(x, vec![7.0; 3]);
    }

    #[test]
    fn length_mismatch_before_factorizing() {
        let a = DenseMatrix::new(4).unwrap();
        let mut x = vec![0.0; 4];
        let err = LuSolver::new().solve(&a, &vec![1.0; 3], &mut x).unwrap_err();
        assert_eq!(err, JError::DimensionMismatch { what: "b", expected: 4, found: 3 });
    }
}
