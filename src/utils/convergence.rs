//! Sweep budget & optional tolerance checks for stationary iterations.

/// Stopping criteria.
///
/// `max_iters` sweeps always bound the run. With `tol` set, the run also stops
/// after the first sweep whose largest update `max |x_new - x_prev|` is below it.
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    pub tol: Option<T>,
    pub max_iters: usize,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    /// Sweeps actually performed.
    pub iterations: usize,
    /// Max-norm of the change made by the last sweep (zero if none ran).
    pub final_update: T,
    /// True only when a tolerance was set and met.
    pub converged: bool,
    /// `‖M·x - b‖∞` after each sweep, when residual monitoring is enabled.
    pub history: Vec<T>,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Run exactly `max_iters` sweeps.
    pub fn fixed(max_iters: usize) -> Self {
        Self { tol: None, max_iters }
    }

    pub fn with_tol(tol: T, max_iters: usize) -> Self {
        Self { tol: Some(tol), max_iters }
    }

    /// Returns (should_stop, stats) given the last sweep's update norm and sweep count `i`.
    pub fn check(&self, update_norm: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = self.tol.is_some_and(|tol| update_norm < tol);
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_update: update_norm,
                converged,
                history: Vec::new(),
            },
        )
    }
}
