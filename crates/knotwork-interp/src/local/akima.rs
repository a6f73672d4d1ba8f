//! Akima spline interpolation.
//!
//! Reference: Akima, H. (1970) "A New Method of Interpolation and Smooth
//! Curve Fitting Based on Local Procedures"

use crate::error::InterpResult;
use crate::piecewise::PiecewiseCubic;
use crate::predictor::{DerivativePredictor, FittablePredictor, Predictor};
use crate::segment::{secant_slopes, validate_samples};

/// Akima spline interpolation.
///
/// The derivative at each node is a weighted average of the secants on
/// either side, weighted by how much the secants further out disagree. A
/// single outlier therefore only bends the curve on the segments touching it.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{AkimaSpline, FittablePredictor, Predictor};
///
/// let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
///
/// let akima = AkimaSpline::fitted(&xs, &ys).unwrap();
///
/// // Flat parts stay flat; the step is smoothed without ringing.
/// assert_eq!(akima.predict(0.5), 0.0);
/// assert_eq!(akima.predict(4.5), 1.0);
/// assert!((akima.predict(2.5) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AkimaSpline {
    cubic: PiecewiseCubic,
}

impl AkimaSpline {
    /// Creates an empty, unfitted Akima spline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying piecewise cubic.
    pub fn cubic(&self) -> &PiecewiseCubic {
        &self.cubic
    }
}

impl Predictor for AkimaSpline {
    fn predict(&self, x: f64) -> f64 {
        self.cubic.predict(x)
    }
}

impl DerivativePredictor for AkimaSpline {
    fn predict_derivative(&self, x: f64) -> f64 {
        self.cubic.predict_derivative(x)
    }
}

impl FittablePredictor for AkimaSpline {
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()> {
        let dydxs = akima_derivatives(xs, ys)?;
        self.cubic.fit_with_derivatives(xs, ys, &dydxs)?;
        log::debug!("fitted Akima spline on {} nodes", xs.len());
        Ok(())
    }
}

/// Estimates node derivatives with Akima's weighting.
///
/// With exactly two samples both derivatives equal the single secant, so the
/// resulting cubic is the straight line through them.
///
/// # Errors
///
/// Returns an error if the lengths differ, there are fewer than 2 points, or
/// `xs` is not strictly increasing.
pub fn akima_derivatives(xs: &[f64], ys: &[f64]) -> InterpResult<Vec<f64>> {
    validate_samples(xs, ys, 2)?;

    let secants = secant_slopes(xs, ys);
    if secants.len() == 1 {
        return Ok(vec![secants[0]; 2]);
    }

    let slopes = extend_slopes(&secants);
    let dydxs = (0..xs.len())
        .map(|i| {
            let w_left = (slopes[i + 2] - slopes[i + 3]).abs();
            let w_right = (slopes[i + 1] - slopes[i]).abs();
            weighted_average(slopes[i + 1], slopes[i + 2], w_left, w_right)
        })
        .collect();
    Ok(dydxs)
}

/// Pads the `n - 1` secants with two linearly extrapolated slopes per side.
///
/// Node `i` sees the secant to its left at index `i + 1` and the secant to
/// its right at index `i + 2` of the result.
fn extend_slopes(secants: &[f64]) -> Vec<f64> {
    let m = secants.len();
    let mut slopes = Vec::with_capacity(m + 4);
    slopes.push(3.0 * secants[0] - 2.0 * secants[1]);
    slopes.push(2.0 * secants[0] - secants[1]);
    slopes.extend_from_slice(secants);
    slopes.push(2.0 * secants[m - 1] - secants[m - 2]);
    slopes.push(3.0 * secants[m - 1] - 2.0 * secants[m - 2]);
    slopes
}

fn weighted_average(left: f64, right: f64, w_left: f64, w_right: f64) -> f64 {
    let w = w_left + w_right;
    if w == 0.0 {
        // Both sides equally uninformative.
        return 0.5 * (left + right);
    }
    (w_left * left + w_right * right) / w
}
