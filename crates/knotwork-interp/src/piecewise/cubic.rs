//! Piecewise cubic polynomials.

use ndarray::{Array2, ArrayView2};

use crate::error::InterpResult;
use crate::predictor::{DerivativePredictor, Predictor};
use crate::segment::{check_length, locate, validate_samples};

/// A piecewise cubic polynomial on sorted breakpoints.
///
/// Segment `i` covers `[xs[i], xs[i + 1])` and evaluates
/// `a0 + a1*dx + a2*dx^2 + a3*dx^3` with `dx = x - xs[i]`, where row `i` of
/// [`coefficients`](Self::coefficients) is `[a0, a1, a2, a3]`. The value and
/// derivative at `xs[last]` are stored separately and also cover everything
/// to the right of it.
///
/// An instance starts empty and is populated by a fit. A failed fit leaves
/// the previous state in place.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{DerivativePredictor, PiecewiseCubic, Predictor};
///
/// // y = x^2 sampled with exact derivatives reproduces the parabola.
/// let xs = [0.0, 1.0, 2.0];
/// let ys = [0.0, 1.0, 4.0];
/// let dydxs = [0.0, 2.0, 4.0];
///
/// let mut pc = PiecewiseCubic::new();
/// pc.fit_with_derivatives(&xs, &ys, &dydxs).unwrap();
///
/// assert!((pc.predict(1.5) - 2.25).abs() < 1e-12);
/// assert!((pc.predict_derivative(1.5) - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCubic {
    xs: Vec<f64>,
    /// (n - 1) x 4, powers of `x - xs[i]` in ascending order
    coeffs: Array2<f64>,
    last_value: f64,
    last_derivative: f64,
}

impl Default for PiecewiseCubic {
    fn default() -> Self {
        Self::new()
    }
}

impl PiecewiseCubic {
    /// Creates an empty, unfitted piecewise cubic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            coeffs: Array2::zeros((0, 4)),
            last_value: 0.0,
            last_derivative: 0.0,
        }
    }

    /// Returns true once a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        !self.xs.is_empty()
    }

    /// Returns the breakpoints of the last successful fit.
    pub fn breakpoints(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the `(n - 1) x 4` coefficient table.
    pub fn coefficients(&self) -> ArrayView2<'_, f64> {
        self.coeffs.view()
    }

    /// Returns the number of cubic segments.
    pub fn segment_count(&self) -> usize {
        self.coeffs.nrows()
    }

    /// Returns the value at, and beyond, the last breakpoint.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Returns the derivative at, and beyond, the last breakpoint.
    pub fn last_derivative(&self) -> f64 {
        self.last_derivative
    }

    /// Fits the cubic Hermite interpolant with prescribed node derivatives.
    ///
    /// Each segment matches the value and derivative at both of its
    /// endpoints, so the result is C1 by construction.
    ///
    /// # Arguments
    ///
    /// * `xs` - Breakpoints (strictly increasing, at least 2)
    /// * `ys` - Values at the breakpoints
    /// * `dydxs` - First derivatives at the breakpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, there are fewer than 2 points,
    /// or `xs` is not strictly increasing.
    pub fn fit_with_derivatives(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        dydxs: &[f64],
    ) -> InterpResult<()> {
        check_length("dydxs", xs.len(), dydxs)?;
        validate_samples(xs, ys, 2)?;

        let m = xs.len() - 1;
        let mut coeffs = Array2::zeros((m, 4));
        for i in 0..m {
            let dx = xs[i + 1] - xs[i];
            let dy = ys[i + 1] - ys[i];
            let mut row = coeffs.row_mut(i);
            row[0] = ys[i];
            row[1] = dydxs[i];
            // Hermite conditions at xs[i + 1] solved for a2 and a3.
            row[2] = (3.0 * dy - (2.0 * dydxs[i] + dydxs[i + 1]) * dx) / dx / dx;
            row[3] = (-2.0 * dy + (dydxs[i] + dydxs[i + 1]) * dx) / dx / dx / dx;
        }

        self.replace(xs, coeffs, ys[m], dydxs[m]);
        Ok(())
    }

    /// Fits from node second derivatives, making the result C2.
    ///
    /// Inputs must already have been validated by the caller.
    pub(crate) fn fit_with_second_derivatives(&mut self, xs: &[f64], ys: &[f64], d2ydx2s: &[f64]) {
        let m = xs.len() - 1;
        let mut coeffs = Array2::zeros((m, 4));
        for i in 0..m {
            let dx = xs[i + 1] - xs[i];
            let dy = ys[i + 1] - ys[i];
            let dm = d2ydx2s[i + 1] - d2ydx2s[i];
            let mut row = coeffs.row_mut(i);
            row[0] = ys[i];
            row[1] = (dy - (d2ydx2s[i] + dm / 3.0) * dx * dx / 2.0) / dx;
            row[2] = d2ydx2s[i] / 2.0;
            row[3] = dm / 6.0 / dx;
        }

        // Derivative of the last segment at its right end.
        let dx = xs[m] - xs[m - 1];
        let last = coeffs.row(m - 1);
        let last_derivative = (3.0 * last[3] * dx + 2.0 * last[2]) * dx + last[1];

        self.replace(xs, coeffs, ys[m], last_derivative);
    }

    fn replace(&mut self, xs: &[f64], coeffs: Array2<f64>, last_value: f64, last_derivative: f64) {
        *self = Self {
            xs: xs.to_vec(),
            coeffs,
            last_value,
            last_derivative,
        };
    }

    fn ensure_fitted(&self) {
        assert!(
            self.is_fitted(),
            "piecewise cubic evaluated before a successful fit"
        );
    }
}

impl Predictor for PiecewiseCubic {
    fn predict(&self, x: f64) -> f64 {
        self.ensure_fitted();
        match locate(&self.xs, x) {
            None => self.coeffs[[0, 0]],
            Some(i) if i == self.coeffs.nrows() => self.last_value,
            Some(i) => {
                let a = self.coeffs.row(i);
                let dx = x - self.xs[i];
                ((a[3] * dx + a[2]) * dx + a[1]) * dx + a[0]
            }
        }
    }
}

impl DerivativePredictor for PiecewiseCubic {
    fn predict_derivative(&self, x: f64) -> f64 {
        self.ensure_fitted();
        match locate(&self.xs, x) {
            None => self.coeffs[[0, 1]],
            Some(i) if i == self.coeffs.nrows() => self.last_derivative,
            Some(i) => {
                let a = self.coeffs.row(i);
                let dx = x - self.xs[i];
                (3.0 * a[3] * dx + 2.0 * a[2]) * dx + a[1]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterpError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_reproduces_known_polynomials() {
        // Left: y = x^2 - x + 1, right: y = x^3 - x + 1.
        let xs = [-1.0, 0.0, 1.0];
        let ys = [3.0, 1.0, 1.0];
        let dydxs = [-3.0, -1.0, 2.0];

        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&xs, &ys, &dydxs).unwrap();

        assert_eq!(
            pc.coefficients(),
            array![[3.0, -3.0, 1.0, 0.0], [1.0, -1.0, 0.0, 1.0]]
        );
        assert_eq!(pc.last_value(), 1.0);
        assert_eq!(pc.last_derivative(), 2.0);

        for x in [-0.75, -0.5, -0.1] {
            assert_relative_eq!(pc.predict(x), x * x - x + 1.0, epsilon = 1e-14);
            assert_relative_eq!(pc.predict_derivative(x), 2.0 * x - 1.0, epsilon = 1e-14);
        }
        for x in [0.1, 0.5, 0.9] {
            assert_relative_eq!(pc.predict(x), x * x * x - x + 1.0, epsilon = 1e-14);
            assert_relative_eq!(pc.predict_derivative(x), 3.0 * x * x - 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_nodes_are_exact() {
        let xs = [0.0, 0.3, 1.1, 2.0, 4.5];
        let ys = [1.0, -2.0, 0.5, 3.0, 3.25];
        let dydxs = [0.0, 1.0, -1.0, 2.0, 0.5];

        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&xs, &ys, &dydxs).unwrap();

        for i in 0..xs.len() {
            assert_eq!(pc.predict(xs[i]), ys[i]);
            assert_eq!(pc.predict_derivative(xs[i]), dydxs[i]);
        }
        assert_eq!(pc.segment_count(), 4);
        assert_eq!(pc.breakpoints(), &xs);
    }

    #[test]
    fn test_flat_extrapolation() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 0.0];
        let dydxs = [0.5, -1.0, -3.0];

        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&xs, &ys, &dydxs).unwrap();

        for x in [-100.0, -1.0, -1e-9] {
            assert_eq!(pc.predict(x), 1.0);
            assert_eq!(pc.predict_derivative(x), 0.5);
        }
        for x in [2.0, 2.0 + 1e-9, 50.0] {
            assert_eq!(pc.predict(x), 0.0);
            assert_eq!(pc.predict_derivative(x), -3.0);
        }
    }

    #[test]
    fn test_two_points_linear() {
        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&[1.0, 3.0], &[2.0, 6.0], &[2.0, 2.0])
            .unwrap();

        assert_eq!(pc.coefficients(), array![[2.0, 2.0, 0.0, 0.0]]);
        assert_relative_eq!(pc.predict(2.0), 4.0, epsilon = 1e-15);
    }

    #[test]
    fn test_length_mismatch_keeps_state() {
        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 1.0])
            .unwrap();
        let before = pc.clone();

        let err = pc
            .fit_with_derivatives(&[0.0, 1.0, 2.0], &[10.0, 20.0], &[0.0, 0.0, 0.0])
            .unwrap_err();
        assert_eq!(err, InterpError::length_mismatch("ys", 3, 2));

        let err = pc
            .fit_with_derivatives(&[0.0, 1.0, 2.0], &[10.0, 20.0, 30.0], &[0.0])
            .unwrap_err();
        assert_eq!(err, InterpError::length_mismatch("dydxs", 3, 1));

        // A short ys is still reported before the point count.
        let err = pc.fit_with_derivatives(&[0.0], &[], &[0.0]).unwrap_err();
        assert_eq!(err, InterpError::length_mismatch("ys", 1, 0));

        assert_eq!(pc, before);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut pc = PiecewiseCubic::new();

        assert_eq!(
            pc.fit_with_derivatives(&[1.0], &[1.0], &[1.0]).unwrap_err(),
            InterpError::insufficient_data(2, 1)
        );
        assert!(matches!(
            pc.fit_with_derivatives(&[0.0, 0.0, 1.0], &[0.0; 3], &[0.0; 3]),
            Err(InterpError::NotStrictlyIncreasing { index: 1, .. })
        ));
        assert!(matches!(
            pc.fit_with_derivatives(&[0.0, 2.0, 1.0], &[0.0; 3], &[0.0; 3]),
            Err(InterpError::NotStrictlyIncreasing { index: 2, .. })
        ));
        assert!(!pc.is_fitted());
    }

    #[test]
    fn test_second_derivative_fit() {
        // y = x^3 has y'' = 6x; the fit reproduces it exactly.
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 8.0];
        let d2 = [0.0, 6.0, 12.0];

        let mut pc = PiecewiseCubic::new();
        pc.fit_with_second_derivatives(&xs, &ys, &d2);

        assert_relative_eq!(pc.predict(0.5), 0.125, epsilon = 1e-14);
        assert_relative_eq!(pc.predict(1.5), 3.375, epsilon = 1e-14);
        assert_relative_eq!(pc.predict_derivative(1.5), 6.75, epsilon = 1e-14);
        assert_relative_eq!(pc.last_derivative(), 12.0, epsilon = 1e-14);
    }

    #[test]
    fn test_refit_replaces_everything() {
        let mut pc = PiecewiseCubic::new();
        pc.fit_with_derivatives(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4], &[0.0; 4])
            .unwrap();
        pc.fit_with_derivatives(&[5.0, 6.0], &[1.0, 2.0], &[1.0, 1.0])
            .unwrap();

        assert_eq!(pc.segment_count(), 1);
        assert_eq!(pc.breakpoints(), &[5.0, 6.0]);
        assert_eq!(pc.predict(0.0), 1.0);
    }

    #[test]
    #[should_panic(expected = "before a successful fit")]
    fn test_unfitted_predict_panics() {
        PiecewiseCubic::new().predict(0.0);
    }
}
