//! Context module for spjacobi.
//!
//! Contexts bundle backend selection, right-hand side construction and solver
//! configuration into a single object that runs a solve.
//!
//! Modules:
//! - [`solve_context`]: the `SolveContext` factory and the `solve` entry point.

pub mod solve_context;
pub use solve_context::{SolveContext, SolveOutcome, format_vector, solve};
