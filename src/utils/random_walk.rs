//! Monte Carlo estimate of the path system's solution.
//!
//! A walker on positions `0..n` steps left or right with equal probability and
//! stops at either end. The probability of stopping at `0` when starting from
//! `i` is exactly `x[i]` for the generated system with the unit right-hand
//! side, so simulated walks give an independent check on the Jacobi result.

use rand::Rng;

use crate::error::JError;

/// Simulate one walk. Returns `true` if the walker reached position `0`
/// before position `n - 1`.
pub fn walk<R: Rng + ?Sized>(n: usize, start: usize, rng: &mut R) -> Result<bool, JError> {
    if start >= n {
        return Err(JError::IndexOutOfRange { row: start, col: start, size: n });
    }
    let mut pos = start;
    loop {
        if pos == 0 {
            return Ok(true);
        }
        if pos >= n - 1 {
            return Ok(false);
        }
        if rng.gen_bool(0.5) {
            pos += 1;
        } else {
            pos -= 1;
        }
    }
}

/// Fraction of `walks` simulated walks from `start` that reach position `0`.
///
/// Returns `0.0` when `walks` is zero.
pub fn simulate_walk<R: Rng + ?Sized>(
    n: usize,
    start: usize,
    walks: usize,
    rng: &mut R,
) -> Result<f64, JError> {
    if walks == 0 {
        return Ok(0.0);
    }
    let mut home = 0usize;
    for _ in 0..walks {
        if walk(n, start, rng)? {
            home += 1;
        }
    }
    Ok(home as f64 / walks as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ends_are_absorbing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(walk(5, 0, &mut rng).unwrap());
        assert!(!walk(5, 4, &mut rng).unwrap());
        assert!(walk(1, 0, &mut rng).unwrap());
    }

    #[test]
    fn start_outside_path_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(walk(5, 5, &mut rng), Err(JError::IndexOutOfRange { .. })));
    }

    #[test]
    fn estimate_tracks_exact_probability() {
        let mut rng = StdRng::seed_from_u64(2019);
        // exact: 1 - 2/8 = 0.75
        let p = simulate_walk(9, 2, 20_000, &mut rng).unwrap();
        assert!((p - 0.75).abs() < 0.02, "estimate {} too far from 0.75", p);
    }
}
