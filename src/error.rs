use thiserror::Error;

// Unified error type for spjacobi

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JError {
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("zero or missing diagonal entry at row {0}")]
    SingularDiagonal(usize),
    #[error("index ({row}, {col}) out of range for {size}x{size} matrix")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
    #[error("invalid matrix dimension {0} (must be at least 1)")]
    InvalidDimension(usize),
    #[error("unknown backend `{0}` (expected `dense` or `sparse`)")]
    UnknownBackend(String),
    #[error("singular matrix: direct solve produced non-finite values")]
    SingularMatrix,
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
