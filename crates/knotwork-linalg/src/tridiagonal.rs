//! Tridiagonal systems.
//!
//! The Thomas algorithm is Gaussian elimination without pivoting specialised
//! to three diagonals. It is stable for diagonally dominant matrices, which is
//! what natural and clamped spline systems produce.

use crate::banded::BandSolverConfig;
use crate::error::{LinalgError, LinalgResult};

/// Solves a tridiagonal system of equations efficiently.
///
/// The system has the form:
/// ```text
/// | b[0]  c[0]   0    ...   0     | | x[0]   |   | d[0]   |
/// | a[0]  b[1]  c[1]  ...   0     | | x[1]   |   | d[1]   |
/// |  0    a[1]  b[2]  ...   0     | | x[2]   | = | d[2]   |
/// | ...   ...   ...   ...  ...    | | ...    |   | ...    |
/// |  0     0     0  a[n-2] b[n-1] | | x[n-1] |   | d[n-1] |
/// ```
///
/// # Arguments
///
/// * `a` - Lower diagonal (length n-1)
/// * `b` - Main diagonal (length n)
/// * `c` - Upper diagonal (length n-1)
/// * `d` - Right-hand side (length n)
///
/// # Example
///
/// ```rust
/// use knotwork_linalg::solve_tridiagonal;
///
/// let x = solve_tridiagonal(&[1.0], &[2.0, 2.0], &[1.0], &[3.0, 3.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> LinalgResult<Vec<f64>> {
    solve_tridiagonal_with(a, b, c, d, &BandSolverConfig::default())
}

/// Solves a tridiagonal system with an explicit pivot tolerance.
///
/// A pivot is rejected when `|pivot| <= config.pivot_tolerance * max|entry|`.
pub fn solve_tridiagonal_with(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    d: &[f64],
    config: &BandSolverConfig,
) -> LinalgResult<Vec<f64>> {
    let n = b.len();

    if n == 0 {
        if a.is_empty() && c.is_empty() && d.is_empty() {
            return Ok(vec![]);
        }
        return Err(LinalgError::invalid_input(
            "Tridiagonal system has an empty main diagonal",
        ));
    }
    if a.len() != n - 1 {
        return Err(LinalgError::dimension_mismatch(n - 1, a.len()));
    }
    if c.len() != n - 1 {
        return Err(LinalgError::dimension_mismatch(n - 1, c.len()));
    }
    if d.len() != n {
        return Err(LinalgError::dimension_mismatch(n, d.len()));
    }

    let scale = a
        .iter()
        .chain(b)
        .chain(c)
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let threshold = config.pivot_tolerance * scale;
    let vanishes = |pivot: f64| pivot.is_nan() || pivot.abs() <= threshold;

    if vanishes(b[0]) {
        return Err(LinalgError::singular(0));
    }

    // Forward elimination
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if n > 1 {
        c_prime[0] = c[0] / b[0];
    }
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let denom = b[i] - a[i - 1] * c_prime[i - 1];
        if vanishes(denom) {
            return Err(LinalgError::singular(i));
        }

        if i < n - 1 {
            c_prime[i] = c[i] / denom;
        }
        d_prime[i] = (d[i] - a[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];

    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}
