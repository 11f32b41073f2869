//! spjacobi: Jacobi iteration over dense and coordinate-sparse matrices
//!
//! Both storage backends implement the same `MatrixView` contract. The solver
//! runs a generic index sweep over any view, and a sweep over stored non-zeros
//! when the backend is known to be sparse.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
