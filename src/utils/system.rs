//! Generated test system: boundary identities plus a `-0.5, 1, -0.5` interior stencil.
//!
//! ```text
//! row 0      : x[0] = b[0]
//! row w      : -0.5 x[w-1] + x[w] - 0.5 x[w+1] = b[w]      (0 < w < n-1)
//! row n-1    : x[n-1] = b[n-1]
//! ```
//!
//! With the unit right-hand side from [`unit_rhs`] the exact solution is the
//! absorption probability of a symmetric random walk, `x[i] = 1 - i/(n-1)`.

use crate::core::traits::MatrixView;
use crate::error::JError;

/// Write the path-system pattern into `m`.
///
/// Only the pattern cells are touched; backends that need the remaining
/// cells cleared do so before calling this.
pub fn fill_path_system<M: MatrixView + ?Sized>(m: &mut M) -> Result<(), JError> {
    let n = m.size();
    if n == 0 {
        return Err(JError::InvalidDimension(n));
    }
    // for n == 1 both boundary writes land on (0, 0)
    m.set(0, 0, 1.0)?;
    m.set(n - 1, n - 1, 1.0)?;
    for w in 1..n.saturating_sub(1) {
        m.set(w, w - 1, -0.5)?;
        m.set(w, w, 1.0)?;
        m.set(w, w + 1, -0.5)?;
    }
    Ok(())
}

/// Right-hand side with a unit impulse at index 0.
pub fn unit_rhs(n: usize) -> Result<Vec<f64>, JError> {
    if n == 0 {
        return Err(JError::InvalidDimension(n));
    }
    let mut b = vec![0.0; n];
    b[0] = 1.0;
    Ok(b)
}

/// Closed-form solution of the path system against [`unit_rhs`].
pub fn exact_path_solution(n: usize) -> Result<Vec<f64>, JError> {
    match n {
        0 => Err(JError::InvalidDimension(n)),
        1 => Ok(vec![1.0]),
        _ => {
            let last = (n - 1) as f64;
            Ok((0..n).map(|i| 1.0 - i as f64 / last).collect())
        }
    }
}
