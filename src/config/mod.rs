//! Configuration for solves built from the command line or through the API.

pub mod options;
pub use options::SolveOptions;
