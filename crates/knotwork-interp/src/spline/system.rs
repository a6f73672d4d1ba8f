//! Assembly of the second-derivative system.

use knotwork_linalg::{solve_tridiagonal_with, BandMatrix, BandSolverConfig};

use crate::error::InterpResult;

/// The linear system for the node second derivatives of a cubic spline.
///
/// Assembly fills every interior row from the C2
/// conditions and leaves the first and last rows zero; a
/// [`BoundaryCondition`](super::BoundaryCondition) writes those.
///
/// Systems are only built by [`CubicSpline`](super::CubicSpline) after it has
/// validated the samples; outside the crate they are reachable solely through
/// [`BoundaryCondition::apply`](super::BoundaryCondition::apply).
///
/// ```compile_fail
/// use knotwork_interp::SecondDerivativeSystem;
///
/// let _ = SecondDerivativeSystem::assemble(&[0.0, 1.0, 2.0], &[0.0], 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SecondDerivativeSystem {
    matrix: BandMatrix,
    rhs: Vec<f64>,
}

impl SecondDerivativeSystem {
    /// Builds the interior rows for validated samples.
    ///
    /// `xs` and `ys` must have equal lengths and `xs` must be finite and
    /// strictly increasing. `bandwidth` is the number of diagonals on each
    /// side of the main one that the boundary rows may touch; interior rows
    /// need one.
    pub(crate) fn assemble(xs: &[f64], ys: &[f64], bandwidth: usize) -> Self {
        let n = xs.len();
        let mut matrix = BandMatrix::zeros(n, bandwidth, bandwidth);
        let mut rhs = vec![0.0; n];

        for i in 1..n.saturating_sub(1) {
            let dx0 = xs[i] - xs[i - 1];
            let dx1 = xs[i + 1] - xs[i];
            matrix.set(i, i - 1, dx0 / 6.0);
            matrix.set(i, i, (dx0 + dx1) / 3.0);
            matrix.set(i, i + 1, dx1 / 6.0);
            rhs[i] = (ys[i + 1] - ys[i]) / dx1 - (ys[i] - ys[i - 1]) / dx0;
        }

        Self { matrix, rhs }
    }

    /// Returns the number of unknowns.
    pub fn order(&self) -> usize {
        self.rhs.len()
    }

    /// Sets a matrix entry.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the assembled band.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.matrix.set(row, col, value);
    }

    /// Sets a right-hand-side entry.
    pub fn set_rhs(&mut self, row: usize, value: f64) {
        self.rhs[row] = value;
    }

    /// Returns the coefficient matrix.
    pub fn matrix(&self) -> &BandMatrix {
        &self.matrix
    }

    /// Returns the right-hand side.
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Solves for the second derivatives.
    ///
    /// Tridiagonal systems go through the Thomas algorithm, wider ones
    /// through a pivoting band LU.
    pub fn solve(&self, config: &BandSolverConfig) -> InterpResult<Vec<f64>> {
        let m = &self.matrix;
        let solution = if m.lower_bandwidth() == 1 && m.upper_bandwidth() == 1 {
            solve_tridiagonal_with(
                &m.diagonal(-1),
                &m.diagonal(0),
                &m.diagonal(1),
                &self.rhs,
                config,
            )?
        } else {
            m.solve_with(&self.rhs, config)?
        };
        Ok(solution)
    }
}
