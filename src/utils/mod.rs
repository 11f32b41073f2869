//! Utilities: the generated test system, sweep-budget tracking, and the
//! random-walk cross-check.

pub mod convergence;
pub mod random_walk;
pub mod system;

pub use convergence::{Convergence, SolveStats};
pub use system::{exact_path_solution, fill_path_system, unit_rhs};
