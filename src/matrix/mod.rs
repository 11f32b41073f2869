//! Matrix module: dense and sparse backends behind the `MatrixView` contract.
//!
//! [`Backend`] is the tagged variant over the two storage strategies. Solvers
//! match on it to pick the sweep that suits the concrete storage; nothing
//! inspects the type of an opaque handle at runtime.

use std::fmt;
use std::str::FromStr;

use crate::core::traits::MatrixView;
use crate::error::JError;

pub mod dense;
pub use dense::DenseMatrix;
pub mod sparse;
pub use sparse::SparseMatrix;

/// Which storage strategy to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Fully materialized `n × n` storage
    #[default]
    Dense,
    /// Non-zero coordinate map
    Sparse,
}

impl FromStr for BackendKind {
    type Err = JError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "normal" is what older scripts pass for the dense path
            "dense" | "normal" => Ok(Self::Dense),
            "sparse" => Ok(Self::Sparse),
            other => Err(JError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => f.write_str("dense"),
            Self::Sparse => f.write_str("sparse"),
        }
    }
}

/// A constructed matrix of either storage strategy.
#[derive(Clone, Debug)]
pub enum Backend {
    Dense(DenseMatrix),
    Sparse(SparseMatrix),
}

impl Backend {
    /// Build and initialize an `n × n` matrix of the requested kind.
    pub fn new(kind: BackendKind, n: usize) -> Result<Self, JError> {
        Ok(match kind {
            BackendKind::Dense => Self::Dense(DenseMatrix::new(n)?),
            BackendKind::Sparse => Self::Sparse(SparseMatrix::new(n)?),
        })
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Dense(_) => BackendKind::Dense,
            Self::Sparse(_) => BackendKind::Sparse,
        }
    }
}

impl MatrixView for Backend {
    fn size(&self) -> usize {
        match self {
            Self::Dense(m) => m.size(),
            Self::Sparse(m) => m.size(),
        }
    }

    fn get(&self, i: usize, j: usize) -> Result<f64, JError> {
        match self {
            Self::Dense(m) => m.get(i, j),
            Self::Sparse(m) => m.get(i, j),
        }
    }

    fn set(&mut self, i: usize, j: usize, x: f64) -> Result<(), JError> {
        match self {
            Self::Dense(m) => m.set(i, j, x),
            Self::Sparse(m) => m.set(i, j, x),
        }
    }

    fn initialize(&mut self) -> Result<(), JError> {
        match self {
            Self::Dense(m) => m.initialize(),
            Self::Sparse(m) => m.initialize(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense(m) => fmt::Display::fmt(m, f),
            Self::Sparse(m) => fmt::Display::fmt(m, f),
        }
    }
}

/// One line per row, logical values separated by a space.
pub(crate) fn write_grid<M: MatrixView + ?Sized>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let n = m.size();
    for i in 0..n {
        for j in 0..n {
            let v = m.get(i, j).map_err(|_| fmt::Error)?;
            write!(f, "{} ", v)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
