//! Banded matrices and their direct solve.
//!
//! A [`BandMatrix`] stores only the diagonals within `lower` below and
//! `upper` above the main diagonal. Each row reserves `lower` extra slots on
//! the right for the fill-in that row interchanges create, so the LU
//! factorisation with partial pivoting runs in place on a copy of the band.

use log::trace;
use nalgebra::DMatrix;

use crate::error::{LinalgError, LinalgResult};

/// Default relative pivot tolerance.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = f64::EPSILON;

/// Configuration for banded and tridiagonal solves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSolverConfig {
    /// A pivot with `|pivot| <= pivot_tolerance * max|A_ij|` is treated as zero.
    pub pivot_tolerance: f64,
}

impl Default for BandSolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl BandSolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    /// Sets the pivot tolerance.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }
}

/// A square matrix with nonzero entries only near the main diagonal.
///
/// # Example
///
/// ```rust
/// use knotwork_linalg::BandMatrix;
///
/// // | 4 1 0 |       | 5 |
/// // | 1 4 1 | x  =  | 6 |
/// // | 0 1 4 |       | 5 |
/// let mut m = BandMatrix::tridiagonal(3);
/// for i in 0..3 {
///     m.set(i, i, 4.0);
///     if i > 0 {
///         m.set(i, i - 1, 1.0);
///         m.set(i - 1, i, 1.0);
///     }
/// }
///
/// let x = m.solve(&[5.0, 6.0, 5.0]).unwrap();
/// for xi in x {
///     assert!((xi - 1.0).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BandMatrix {
    order: usize,
    lower: usize,
    upper: usize,
    /// Row-major band storage; entry (i, j) lives at `i * stride + (j + lower - i)`.
    data: Vec<f64>,
}

impl BandMatrix {
    /// Creates an `order x order` zero matrix with the given bandwidths.
    #[must_use]
    pub fn zeros(order: usize, lower: usize, upper: usize) -> Self {
        let stride = 2 * lower + upper + 1;
        Self {
            order,
            lower,
            upper,
            data: vec![0.0; order * stride],
        }
    }

    /// Creates an `order x order` zero tridiagonal matrix.
    #[must_use]
    pub fn tridiagonal(order: usize) -> Self {
        Self::zeros(order, 1, 1)
    }

    /// Returns the number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of diagonals below the main diagonal.
    pub fn lower_bandwidth(&self) -> usize {
        self.lower
    }

    /// Returns the number of diagonals above the main diagonal.
    pub fn upper_bandwidth(&self) -> usize {
        self.upper
    }

    /// Returns true if `(row, col)` may hold a nonzero entry.
    pub fn in_band(&self, row: usize, col: usize) -> bool {
        row < self.order && col < self.order && col + self.lower >= row && col <= row + self.upper
    }

    fn stride(&self) -> usize {
        2 * self.lower + self.upper + 1
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.stride() + (col + self.lower - row)
    }

    /// Returns the entry at `(row, col)`; zero outside the band.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if self.in_band(row, col) {
            self.data[self.index(row, col)]
        } else {
            0.0
        }
    }

    /// Sets the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the matrix or outside its band.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            self.in_band(row, col),
            "entry ({}, {}) is outside the band of a {}x{} matrix with bandwidths ({}, {})",
            row,
            col,
            self.order,
            self.order,
            self.lower,
            self.upper
        );
        let k = self.index(row, col);
        self.data[k] = value;
    }

    /// Returns a copy of the diagonal at `offset` (0 is the main diagonal,
    /// negative offsets are below it).
    pub fn diagonal(&self, offset: isize) -> Vec<f64> {
        let shift = offset.unsigned_abs();
        let len = self.order.saturating_sub(shift);
        if offset >= 0 {
            (0..len).map(|i| self.get(i, i + shift)).collect()
        } else {
            (0..len).map(|i| self.get(i + shift, i)).collect()
        }
    }

    /// Computes `A * x`.
    pub fn mul_vec(&self, x: &[f64]) -> LinalgResult<Vec<f64>> {
        if x.len() != self.order {
            return Err(LinalgError::dimension_mismatch(self.order, x.len()));
        }
        let y = (0..self.order)
            .map(|i| {
                let first = i.saturating_sub(self.lower);
                let last = (i + self.upper).min(self.order - 1);
                (first..=last).map(|j| self.get(i, j) * x[j]).sum()
            })
            .collect();
        Ok(y)
    }

    /// Expands the band into a dense matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.order, self.order, |i, j| self.get(i, j))
    }

    fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Solves `A x = rhs` with the default configuration.
    pub fn solve(&self, rhs: &[f64]) -> LinalgResult<Vec<f64>> {
        self.solve_with(rhs, &BandSolverConfig::default())
    }

    /// Solves `A x = rhs` by banded LU factorisation with partial pivoting.
    ///
    /// The matrix itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] when no acceptable pivot exists
    /// in some column, and [`LinalgError::DimensionMismatch`] when `rhs` has
    /// the wrong length.
    pub fn solve_with(&self, rhs: &[f64], config: &BandSolverConfig) -> LinalgResult<Vec<f64>> {
        let n = self.order;
        if rhs.len() != n {
            return Err(LinalgError::dimension_mismatch(n, rhs.len()));
        }
        if n == 0 {
            return Ok(vec![]);
        }

        let threshold = config.pivot_tolerance * self.max_abs();
        let stride = self.stride();
        let lower = self.lower;
        // Row interchanges widen the upper band by `lower`.
        let reach = self.lower + self.upper;
        let at = |row: usize, col: usize| row * stride + (col + lower - row);

        let mut lu = self.data.clone();
        let mut b = rhs.to_vec();

        for k in 0..n {
            let last_row = (k + lower).min(n - 1);
            let last_col = (k + reach).min(n - 1);

            let mut pivot_row = k;
            let mut pivot_abs = lu[at(k, k)].abs();
            for i in k + 1..=last_row {
                let candidate = lu[at(i, k)].abs();
                if candidate > pivot_abs {
                    pivot_row = i;
                    pivot_abs = candidate;
                }
            }
            if pivot_abs.is_nan() || pivot_abs <= threshold {
                return Err(LinalgError::singular(k));
            }

            if pivot_row != k {
                trace!("band solve: column {} pivots on row {}", k, pivot_row);
                for j in k..=last_col {
                    lu.swap(at(k, j), at(pivot_row, j));
                }
                b.swap(k, pivot_row);
            }

            let pivot = lu[at(k, k)];
            for i in k + 1..=last_row {
                let factor = lu[at(i, k)] / pivot;
                for j in k..=last_col {
                    lu[at(i, j)] -= factor * lu[at(k, j)];
                }
                b[i] -= factor * b[k];
            }
        }

        // Back substitution
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let last_col = (i + reach).min(n - 1);
            let mut sum = b[i];
            for j in i + 1..=last_col {
                sum -= lu[at(i, j)] * x[j];
            }
            x[i] = sum / lu[at(i, i)];
        }

        Ok(x)
    }
}
