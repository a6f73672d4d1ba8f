//! Piecewise linear interpolation.

use crate::error::InterpResult;
use crate::predictor::{DerivativePredictor, FittablePredictor, Predictor};
use crate::segment::{locate, secant_slopes, validate_samples};

/// Linear interpolation between data points.
///
/// The simplest form of interpolation, connecting consecutive points
/// with straight lines. Outside the data the value is held flat at the
/// nearest end point; the derivative there is the slope of the nearest
/// segment, matching how the cubic interpolators report end derivatives.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{FittablePredictor, PiecewiseLinear, Predictor};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = PiecewiseLinear::fitted(&xs, &ys).unwrap();
/// assert!((interp.predict(1.5) - 2.5).abs() < 1e-12);
/// assert_eq!(interp.predict(10.0), 9.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiecewiseLinear {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl PiecewiseLinear {
    /// Creates an empty, unfitted interpolator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        !self.xs.is_empty()
    }

    /// Returns the secant slope of every segment.
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    fn ensure_fitted(&self) {
        assert!(
            self.is_fitted(),
            "piecewise linear interpolator evaluated before a successful fit"
        );
    }
}

impl Predictor for PiecewiseLinear {
    fn predict(&self, x: f64) -> f64 {
        self.ensure_fitted();
        match locate(&self.xs, x) {
            None => self.ys[0],
            Some(i) if i == self.slopes.len() => self.ys[i],
            Some(i) => self.ys[i] + self.slopes[i] * (x - self.xs[i]),
        }
    }
}

impl DerivativePredictor for PiecewiseLinear {
    fn predict_derivative(&self, x: f64) -> f64 {
        self.ensure_fitted();
        match locate(&self.xs, x) {
            None => self.slopes[0],
            Some(i) => self.slopes[i.min(self.slopes.len() - 1)],
        }
    }
}

impl FittablePredictor for PiecewiseLinear {
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()> {
        validate_samples(xs, ys, 2)?;

        *self = Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            slopes: secant_slopes(xs, ys),
        };
        log::debug!("fitted piecewise linear interpolator on {} nodes", xs.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let interp = PiecewiseLinear::fitted(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();

        // Test at exact points
        assert_relative_eq!(interp.predict(0.0), 0.0, epsilon = 1e-10);
        assert_relative_eq!(interp.predict(1.0), 2.0, epsilon = 1e-10);
        assert_relative_eq!(interp.predict(2.0), 4.0, epsilon = 1e-10);

        // Test interpolation
        assert_relative_eq!(interp.predict(0.5), 1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.predict(1.5), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_extrapolation() {
        let interp = PiecewiseLinear::fitted(&[0.0, 1.0, 3.0], &[1.0, 3.0, 2.0]).unwrap();

        assert_eq!(interp.predict(-5.0), 1.0);
        assert_eq!(interp.predict(3.0), 2.0);
        assert_eq!(interp.predict(7.0), 2.0);

        assert_eq!(interp.predict_derivative(-5.0), 2.0);
        assert_eq!(interp.predict_derivative(0.5), 2.0);
        assert_eq!(interp.predict_derivative(1.0), -0.5);
        assert_eq!(interp.predict_derivative(3.0), -0.5);
        assert_eq!(interp.predict_derivative(9.0), -0.5);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(PiecewiseLinear::fitted(&[0.0], &[1.0]).is_err());
    }

    #[test]
    fn test_unsorted_error() {
        let mut interp = PiecewiseLinear::fitted(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let before = interp.clone();

        assert!(interp.fit(&[1.0, 0.0, 2.0], &[1.0, 0.0, 2.0]).is_err());
        assert_eq!(interp, before);
    }
}
