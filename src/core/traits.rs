//! Core linear-algebra traits for spjacobi.

use crate::error::JError;

/// Read/write access to a logical `n × n` grid of `f64` values.
///
/// Both storage backends satisfy the same contract: an in-range `get` returns
/// the last value written with `set`, or `0.0` if the cell was never written.
/// Out-of-range access fails with [`JError::IndexOutOfRange`].
pub trait MatrixView {
    /// Dimension `n` of the square matrix.
    fn size(&self) -> usize;

    /// Logical value at `(i, j)`.
    fn get(&self, i: usize, j: usize) -> Result<f64, JError>;

    /// Overwrite the logical value at `(i, j)`.
    fn set(&mut self, i: usize, j: usize, x: f64) -> Result<(), JError>;

    /// Populate with the boundary-identity tridiagonal pattern.
    ///
    /// Idempotent: every write is an unconditional overwrite.
    fn initialize(&mut self) -> Result<(), JError> {
        crate::utils::system::fill_path_system(self)
    }

    /// Fails with `IndexOutOfRange` unless `(i, j)` lies in `[0, n) × [0, n)`.
    fn check_index(&self, i: usize, j: usize) -> Result<(), JError> {
        let size = self.size();
        if i < size && j < size {
            Ok(())
        } else {
            Err(JError::IndexOutOfRange { row: i, col: j, size })
        }
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}
