//! Core traits and vector helpers shared by both matrix backends.

pub mod traits;
pub mod wrappers;

pub use traits::{MatVec, MatrixView};
pub use wrappers::{norm_inf, residual, residual_norm_inf, sum};
