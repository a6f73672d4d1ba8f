//! Globally smooth cubic splines.
//!
//! A cubic spline is C2: value, slope and curvature are continuous at every
//! interior node. That couples all segments, so the node second derivatives
//! `m[0..n]` are found from one banded linear system:
//!
//! ```text
//! m[i-1]*dx[i-1]/6 + m[i]*(dx[i-1]+dx[i])/3 + m[i+1]*dx[i]/6 = slope[i] - slope[i-1]
//! ```
//!
//! for every interior node, plus one row per end supplied by a
//! [`BoundaryCondition`]:
//!
//! | Boundary | End rows | Bandwidth | Min points |
//! |----------|----------|-----------|------------|
//! | [`Natural`] | `m = 0` | 1 | 2 |
//! | [`Clamped`] | `y' = 0` | 1 | 2 |
//! | [`NotAKnot`] | `y'''` continuous at second and penultimate node | 2 | 3 |

mod boundary;
mod system;

pub use boundary::{BoundaryCondition, Clamped, Natural, NotAKnot};
pub use system::SecondDerivativeSystem;

use knotwork_linalg::BandSolverConfig;

use crate::error::InterpResult;
use crate::piecewise::PiecewiseCubic;
use crate::predictor::{DerivativePredictor, FittablePredictor, Predictor};
use crate::segment::validate_samples;

/// Natural cubic spline: zero curvature at both ends.
pub type NaturalCubic = CubicSpline<Natural>;

/// Clamped cubic spline: zero slope at both ends.
pub type ClampedCubic = CubicSpline<Clamped>;

/// Not-a-knot cubic spline: the first two and last two segments are each a
/// single cubic.
pub type NotAKnotCubic = CubicSpline<NotAKnot>;

/// A C2 cubic spline whose end behaviour is fixed by the type parameter.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{ClampedCubic, DerivativePredictor, FittablePredictor, Predictor};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let spline = ClampedCubic::fitted(&xs, &ys).unwrap();
///
/// assert_eq!(spline.predict(2.0), 4.0);
/// assert!(spline.predict_derivative(0.0).abs() < 1e-12);
/// assert!(spline.predict_derivative(3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicSpline<B: BoundaryCondition> {
    cubic: PiecewiseCubic,
    boundary: B,
    solver: BandSolverConfig,
}

impl<B: BoundaryCondition> CubicSpline<B> {
    /// Creates an empty, unfitted spline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cubic: PiecewiseCubic::new(),
            boundary: B::default(),
            solver: BandSolverConfig::default(),
        }
    }

    /// Sets the configuration used for the second-derivative solve.
    #[must_use]
    pub fn with_solver_config(mut self, solver: BandSolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the boundary condition.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Returns the name of the boundary condition.
    pub fn boundary_name(&self) -> &'static str {
        B::NAME
    }

    /// Returns the underlying piecewise cubic.
    pub fn cubic(&self) -> &PiecewiseCubic {
        &self.cubic
    }

    /// Solves for the node second derivatives without storing anything.
    ///
    /// # Errors
    ///
    /// Returns a shape or ordering error for invalid samples, and
    /// [`InterpError::Solve`](crate::InterpError::Solve) if the system is
    /// singular.
    pub fn second_derivatives(&self, xs: &[f64], ys: &[f64]) -> InterpResult<Vec<f64>> {
        validate_samples(xs, ys, B::MIN_POINTS)?;

        let mut system = SecondDerivativeSystem::assemble(xs, ys, B::BANDWIDTH);
        self.boundary.apply(xs, ys, &mut system);
        system.solve(&self.solver).map_err(|e| {
            log::debug!("{} cubic spline rejected by solver: {}", B::NAME, e);
            e
        })
    }
}

impl<B: BoundaryCondition> Predictor for CubicSpline<B> {
    fn predict(&self, x: f64) -> f64 {
        self.cubic.predict(x)
    }
}

impl<B: BoundaryCondition> DerivativePredictor for CubicSpline<B> {
    fn predict_derivative(&self, x: f64) -> f64 {
        self.cubic.predict_derivative(x)
    }
}

impl<B: BoundaryCondition> FittablePredictor for CubicSpline<B> {
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()> {
        let d2ydx2s = self.second_derivatives(xs, ys)?;
        self.cubic.fit_with_second_derivatives(xs, ys, &d2ydx2s);
        log::debug!("fitted {} cubic spline on {} nodes", B::NAME, xs.len());
        Ok(())
    }
}
