//! Command-line or API options for a solve.
//!
//! `SolveOptions` selects the storage backend, the system size, the sweep
//! budget, and the optional early-exit tolerance. The defaults reproduce the
//! demonstration run: dense backend, `n = 6`, 20 sweeps, no tolerance.

use crate::error::JError;
use crate::matrix::BackendKind;
use crate::solver::{JacobiFlags, JacobiSolver};

/// Backend & iteration parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOptions {
    /// Storage backend (dense, sparse)
    pub backend: BackendKind,

    /// Number of unknowns
    pub n: usize,

    /// Sweep budget
    pub iterations: usize,

    /// Early-exit threshold on the max-norm update
    pub tol: Option<f64>,

    pub flags: JacobiFlags,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            backend: BackendKind::Dense,
            n: 6,
            iterations: 20,
            tol: None,
            flags: JacobiFlags::empty(),
        }
    }
}

impl SolveOptions {
    pub fn new(backend: BackendKind, n: usize, iterations: usize) -> Self {
        Self { backend, n, iterations, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), JError> {
        if self.n == 0 {
            return Err(JError::InvalidDimension(self.n));
        }
        Ok(())
    }

    /// Solver configured from these options.
    pub fn solver(&self) -> JacobiSolver {
        let solver = JacobiSolver::new(self.iterations).with_flags(self.flags);
        match self.tol {
            Some(tol) => solver.with_tol(tol),
            None => solver,
        }
    }
}
