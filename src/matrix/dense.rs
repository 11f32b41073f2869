//! Dense backend on top of Faer.
//!
//! Every cell of the `n × n` grid is physically stored in an owned
//! `faer::Mat<f64>`, so access is a direct index with no presence check.
//! Memory is O(n²); use it as the reference path and for small systems.

use std::fmt;

use crate::core::traits::MatrixView;
use crate::error::JError;
use faer::{Mat, MatRef};

/// Fully materialized square matrix.
#[derive(Clone, Debug)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Allocate an `n × n` matrix and populate it with the path-system pattern.
    pub fn new(n: usize) -> Result<Self, JError> {
        let mut m = Self::zeros(n)?;
        m.initialize()?;
        Ok(m)
    }

    /// Allocate an all-zero `n × n` matrix without initializing it.
    pub fn zeros(n: usize) -> Result<Self, JError> {
        if n == 0 {
            return Err(JError::InvalidDimension(n));
        }
        Ok(Self { inner: Mat::zeros(n, n) })
    }

    /// Build from row-major nested vectors. Every row must have `rows.len()` entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, JError> {
        let n = rows.len();
        if n == 0 {
            return Err(JError::InvalidDimension(n));
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(JError::DimensionMismatch {
                what: "matrix row",
                expected: n,
                found: bad.len(),
            });
        }
        Ok(Self { inner: Mat::from_fn(n, n, |i, j| rows[i][j]) })
    }

    /// Borrow the underlying Faer matrix.
    pub fn as_faer(&self) -> MatRef<'_, f64> {
        self.inner.as_ref()
    }
}

impl MatrixView for DenseMatrix {
    fn size(&self) -> usize {
        self.inner.nrows()
    }

    fn get(&self, i: usize, j: usize) -> Result<f64, JError> {
        self.check_index(i, j)?;
        Ok(self.inner[(i, j)])
    }

    fn set(&mut self, i: usize, j: usize, x: f64) -> Result<(), JError> {
        self.check_index(i, j)?;
        self.inner[(i, j)] = x;
        Ok(())
    }

    // Cells outside the pattern are reset to explicit zeros first.
    fn initialize(&mut self) -> Result<(), JError> {
        let n = self.size();
        self.inner = Mat::zeros(n, n);
        crate::utils::system::fill_path_system(self)
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_grid(self, f)
    }
}
