//! Jacobi iteration, synchronous update.
//!
//! Each sweep computes
//!
//! ```text
//! x_new[w] = (b[w] - Σ_{k≠w} A[w,k] · x_prev[k]) / A[w,w]
//! ```
//!
//! reading only the previous sweep's vector. The solver keeps two buffers and
//! swaps them at sweep boundaries, so no row ever sees a value written in the
//! same sweep.
//!
//! Two sweep strategies exist:
//! - the index sweep visits every `(w, k)` pair through [`MatrixView::get`] and
//!   works for any backend;
//! - the non-zero sweep walks [`SparseMatrix::entries`] instead. It runs in
//!   three passes (reset to `b`, subtract every off-diagonal term, divide by
//!   every diagonal term). The divide pass must not start before all
//!   subtractions are done since entries arrive in no particular order.
//!
//! The caller's `x` is only overwritten when the whole solve succeeds.

use std::fmt;

use bitflags::bitflags;
use tracing::{debug, trace, warn};

use crate::core::traits::{MatVec, MatrixView};
use crate::core::wrappers::{check_len, diff_norm_inf, residual_norm_inf};
use crate::error::JError;
use crate::matrix::{Backend, DenseMatrix, SparseMatrix};
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct JacobiFlags: u32 {
        /// Ignore the incoming `x` and start from all zeros.
        const ZERO_INITIAL_GUESS = 0b01;
        /// Record `‖A·x - b‖∞` after every sweep in `SolveStats::history`.
        const MONITOR_RESIDUAL   = 0b10;
    }
}

pub struct JacobiSolver {
    pub conv: Convergence<f64>,
    pub flags: JacobiFlags,
}

impl JacobiSolver {
    /// Fixed budget of `iterations` sweeps, no early exit.
    pub fn new(iterations: usize) -> Self {
        Self { conv: Convergence::fixed(iterations), flags: JacobiFlags::empty() }
    }

    /// Also stop once a sweep changes no entry by `tol` or more.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.conv.tol = Some(tol);
        self
    }

    pub fn with_flags(mut self, flags: JacobiFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Index-sweep solve over any view.
    pub fn solve_view<M>(&self, a: &M, b: &[f64], x: &mut [f64]) -> Result<SolveStats<f64>, JError>
    where
        M: MatrixView + MatVec<Vec<f64>> + ?Sized,
    {
        debug!(strategy = "index", n = a.size(), max_iters = self.conv.max_iters, tol = ?self.conv.tol, "jacobi solve");
        self.iterate(a, b, x, |prev, next| index_sweep(a, b, prev, next))
    }

    /// Non-zero sweep over the stored entries of a sparse matrix.
    pub fn solve_sparse(&self, a: &SparseMatrix, b: &[f64], x: &mut [f64]) -> Result<SolveStats<f64>, JError> {
        debug!(strategy = "nonzero", n = a.size(), nnz = a.nnz(), max_iters = self.conv.max_iters, tol = ?self.conv.tol, "jacobi solve");
        check_len("b", a.size(), b.len())?;
        check_len("x", a.size(), x.len())?;
        if self.conv.max_iters > 0 {
            check_diagonal(a)?;
        }
        self.iterate(a, b, x, |prev, next| nonzero_sweep(a, b, prev, next))
    }

    /// Picks the sweep strategy from the backend variant.
    pub fn solve_backend(&self, a: &Backend, b: &[f64], x: &mut [f64]) -> Result<SolveStats<f64>, JError> {
        match a {
            Backend::Dense(m) => self.solve_view(m, b, x),
            Backend::Sparse(m) => self.solve_sparse(m, b, x),
        }
    }

    fn iterate<M, F>(&self, a: &M, b: &[f64], x: &mut [f64], mut sweep: F) -> Result<SolveStats<f64>, JError>
    where
        M: MatrixView + MatVec<Vec<f64>> + ?Sized,
        F: FnMut(&[f64], &mut [f64]) -> Result<(), JError>,
    {
        let n = a.size();
        check_len("b", n, b.len())?;
        check_len("x", n, x.len())?;

        let mut prev = if self.flags.contains(JacobiFlags::ZERO_INITIAL_GUESS) {
            vec![0.0; n]
        } else {
            x.to_vec()
        };
        let mut next = vec![0.0; n];
        let monitor = self.flags.contains(JacobiFlags::MONITOR_RESIDUAL);
        let mut history = Vec::new();
        let mut stats = SolveStats { iterations: 0, final_update: 0.0, converged: false, history: Vec::new() };

        for i in 1..=self.conv.max_iters {
            sweep(prev.as_slice(), next.as_mut_slice())?;
            let update = diff_norm_inf(&next, &prev);
            std::mem::swap(&mut prev, &mut next);
            if monitor {
                history.push(residual_norm_inf(a, &prev, b)?);
            }
            trace!(sweep = i, update, "jacobi sweep");
            let (stop, s) = self.conv.check(update, i);
            stats = s;
            if stop {
                if stats.converged {
                    debug!(sweeps = i, update, "jacobi converged before budget");
                }
                break;
            }
        }

        stats.history = history;
        x.copy_from_slice(&prev);
        Ok(stats)
    }
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl fmt::Display for JacobiSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jacobi(max_iters={}, tol={:?}, flags={:?})", self.conv.max_iters, self.conv.tol, self.flags)
    }
}

fn index_sweep<M: MatrixView + ?Sized>(a: &M, b: &[f64], prev: &[f64], next: &mut [f64]) -> Result<(), JError> {
    let n = a.size();
    for w in 0..n {
        let mut acc = b[w];
        for k in 0..n {
            if k != w {
                acc -= prev[k] * a.get(w, k)?;
            }
        }
        let d = a.get(w, w)?;
        if d == 0.0 {
            warn!(row = w, "jacobi: zero diagonal");
            return Err(JError::SingularDiagonal(w));
        }
        next[w] = acc / d;
    }
    Ok(())
}

fn nonzero_sweep(a: &SparseMatrix, b: &[f64], prev: &[f64], next: &mut [f64]) -> Result<(), JError> {
    next.copy_from_slice(b);
    for (i, j, v) in a.entries() {
        if i != j {
            next[i] -= prev[j] * v;
        }
    }
    // only after every subtraction has landed
    for (i, j, v) in a.entries() {
        if i == j {
            if v == 0.0 {
                warn!(row = i, "jacobi: zero diagonal");
                return Err(JError::SingularDiagonal(i));
            }
            next[i] /= v;
        }
    }
    Ok(())
}

// A row with no stored diagonal would silently skip its divide.
fn check_diagonal(a: &SparseMatrix) -> Result<(), JError> {
    let mut present = vec![false; a.size()];
    for (i, j, v) in a.entries() {
        if i == j && v != 0.0 {
            present[i] = true;
        }
    }
    match present.iter().position(|&p| !p) {
        Some(row) => {
            warn!(row, "jacobi: zero diagonal");
            Err(JError::SingularDiagonal(row))
        }
        None => Ok(()),
    }
}

impl LinearSolver<DenseMatrix, Vec<f64>> for JacobiSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &DenseMatrix, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        self.solve_view(a, b, x)
    }
}

impl LinearSolver<SparseMatrix, Vec<f64>> for JacobiSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &SparseMatrix, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        self.solve_sparse(a, b, x)
    }
}

impl LinearSolver<Backend, Vec<f64>> for JacobiSolver {
    type Error = JError;
    type Scalar = f64;

    fn solve(&mut self, a: &Backend, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, JError> {
        self.solve_backend(a, b, x)
    }
}
