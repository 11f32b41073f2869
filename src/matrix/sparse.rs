//! Coordinate-keyed sparse backend.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::traits::MatrixView;
use crate::error::JError;
use crate::matrix::DenseMatrix;

/// Square matrix storing only explicitly written cells, keyed by `(row, col)`.
///
/// Absent keys read as `0.0`. Writing `0.0` still stores an entry; explicit
/// zeros are valid and show up in [`SparseMatrix::entries`].
#[derive(Clone, Debug)]
pub struct SparseMatrix {
    n: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

impl SparseMatrix {
    /// Create an `n × n` matrix populated with the path-system pattern.
    pub fn new(n: usize) -> Result<Self, JError> {
        let mut m = Self::empty(n)?;
        m.initialize()?;
        Ok(m)
    }

    /// Create an `n × n` matrix with no stored entries.
    pub fn empty(n: usize) -> Result<Self, JError> {
        if n == 0 {
            return Err(JError::InvalidDimension(n));
        }
        Ok(Self { n, entries: BTreeMap::new() })
    }

    /// Copy the non-zero cells of a dense matrix.
    pub fn from_dense(dense: &DenseMatrix) -> Result<Self, JError> {
        let n = dense.size();
        let mut m = Self::empty(n)?;
        for i in 0..n {
            for j in 0..n {
                let v = dense.get(i, j)?;
                if v != 0.0 {
                    m.entries.insert((i, j), v);
                }
            }
        }
        Ok(m)
    }

    /// Number of stored entries (explicit zeros included).
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// All stored `(row, col, value)` triples.
    ///
    /// Callers must not rely on the enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries.iter().map(|(&(i, j), &v)| (i, j, v))
    }

    /// Materialize every logical cell.
    pub fn to_dense(&self) -> Result<DenseMatrix, JError> {
        let mut dense = DenseMatrix::zeros(self.n)?;
        for (i, j, v) in self.entries() {
            dense.set(i, j, v)?;
        }
        Ok(dense)
    }
}

impl MatrixView for SparseMatrix {
    fn size(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize, j: usize) -> Result<f64, JError> {
        self.check_index(i, j)?;
        Ok(self.entries.get(&(i, j)).copied().unwrap_or(0.0))
    }

    fn set(&mut self, i: usize, j: usize, x: f64) -> Result<(), JError> {
        self.check_index(i, j)?;
        self.entries.insert((i, j), x);
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), JError> {
        self.entries.clear();
        crate::utils::system::fill_path_system(self)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_grid(self, f)
    }
}
