//! Matrix-vector products for both backends plus small vector reductions.
//!
//! The products follow the usual `y = A * x` convention and assert on length
//! mismatches; the fallible helpers below check lengths first and report
//! [`JError::DimensionMismatch`] instead.

use crate::core::traits::{MatVec, MatrixView};
use crate::error::JError;
use crate::matrix::{Backend, DenseMatrix, SparseMatrix};
use num_traits::Float;

/// Dense product over the Faer storage.
impl MatVec<Vec<f64>> for DenseMatrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        let a = self.as_faer();
        assert_eq!(a.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(a.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..a.nrows() {
            y[i] = 0.0;
            for j in 0..a.ncols() {
                y[i] += a[(i, j)] * x[j];
            }
        }
    }
}

/// Sparse product visiting stored entries only.
impl MatVec<Vec<f64>> for SparseMatrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.size(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.size(), x.len(), "Input vector x has incorrect length");
        y.iter_mut().for_each(|yi| *yi = 0.0);
        for (i, j, v) in self.entries() {
            y[i] += v * x[j];
        }
    }
}

impl MatVec<Vec<f64>> for Backend {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        match self {
            Backend::Dense(m) => m.matvec(x, y),
            Backend::Sparse(m) => m.matvec(x, y),
        }
    }
}

/// Sum of all entries (the CLI checksum).
pub fn sum<T: Float>(x: &[T]) -> T {
    x.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Largest absolute entry; zero for an empty slice.
pub fn norm_inf<T: Float>(x: &[T]) -> T {
    x.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()))
}

/// Largest absolute entry of `a - b`.
pub(crate) fn diff_norm_inf<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&u, &v)| acc.max((u - v).abs()))
}

/// Residual vector `A·x - b`.
pub fn residual<M>(a: &M, x: &[f64], b: &[f64]) -> Result<Vec<f64>, JError>
where
    M: MatrixView + MatVec<Vec<f64>> + ?Sized,
{
    let n = a.size();
    check_len("x", n, x.len())?;
    check_len("b", n, b.len())?;
    let mut r = vec![0.0; n];
    a.matvec(&x.to_vec(), &mut r);
    for (ri, bi) in r.iter_mut().zip(b) {
        *ri -= bi;
    }
    Ok(r)
}

/// `‖A·x - b‖∞`.
pub fn residual_norm_inf<M>(a: &M, x: &[f64], b: &[f64]) -> Result<f64, JError>
where
    M: MatrixView + MatVec<Vec<f64>> + ?Sized,
{
    Ok(norm_inf(&residual(a, x, b)?))
}

pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), JError> {
    if expected == found {
        Ok(())
    } else {
        Err(JError::DimensionMismatch { what, expected, found })
    }
}
