//! Factory for a complete solve.
//!
//! `SolveContext` turns [`SolveOptions`] into the pieces of one run: the unit
//! right-hand side, the chosen backend populated with the path system, and a
//! configured [`JacobiSolver`]. Every run starts from an all-zero guess.
//!
//! # Usage
//!
//! 1. Build a context with `SolveContext::new(options)`.
//! 2. Call `run` to get the final vector, its sum, and the sweep stats.
//!
//! [`solve`] wraps both steps for the common case.

use tracing::debug;

use crate::config::SolveOptions;
use crate::core::wrappers::sum;
use crate::error::JError;
use crate::matrix::{Backend, BackendKind};
use crate::solver::JacobiSolver;
use crate::utils::convergence::SolveStats;
use crate::utils::system::unit_rhs;

/// Result of a finished solve.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    pub solution: Vec<f64>,
    /// Sum of the solution entries, used as a quick checksum.
    pub sum: f64,
    pub stats: SolveStats<f64>,
}

/// Matrix, right-hand side and solver for one run.
pub struct SolveContext {
    pub options: SolveOptions,
    pub a: Backend,
    pub b: Vec<f64>,
    solver: JacobiSolver,
}

impl SolveContext {
    pub fn new(options: SolveOptions) -> Result<Self, JError> {
        options.validate()?;
        let b = unit_rhs(options.n)?;
        let a = Backend::new(options.backend, options.n)?;
        let solver = options.solver();
        debug!(backend = %options.backend, n = options.n, %solver, "solve context ready");
        Ok(Self { options, a, b, solver })
    }

    /// Solve in place starting from the caller's guess.
    pub fn solve_context(&self, x: &mut [f64]) -> Result<SolveStats<f64>, JError> {
        self.solver.solve_backend(&self.a, &self.b, x)
    }

    /// Solve from an all-zero guess.
    pub fn run(&self) -> Result<SolveOutcome, JError> {
        let mut x = vec![0.0; self.options.n];
        let stats = self.solve_context(&mut x)?;
        let total = sum(&x);
        Ok(SolveOutcome { solution: x, sum: total, stats })
    }
}

/// Build the path system on `backend`, run `iterations` sweeps from zero,
/// and return the solution with its sum.
pub fn solve(backend: BackendKind, n: usize, iterations: usize) -> Result<(Vec<f64>, f64), JError> {
    let out = SolveContext::new(SolveOptions::new(backend, n, iterations))?.run()?;
    Ok((out.solution, out.sum))
}

/// Tab-separated entries.
pub fn format_vector(x: &[f64]) -> String {
    x.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("\t")
}
