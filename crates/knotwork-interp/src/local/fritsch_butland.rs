//! Fritsch-Butland monotone cubic interpolation.
//!
//! Reference: Fritsch, F. N. & Butland, J. (1984) "A Method for Constructing
//! Local Monotone Piecewise Cubic Interpolants"

use crate::error::InterpResult;
use crate::piecewise::PiecewiseCubic;
use crate::predictor::{DerivativePredictor, FittablePredictor, Predictor};
use crate::segment::{secant_slopes, validate_samples};

/// Monotone piecewise cubic interpolation.
///
/// Interior derivatives are a weighted harmonic mean of the neighbouring
/// secants when those agree in sign, and zero otherwise. The curve therefore
/// never leaves `[min(y_i, y_i+1), max(y_i, y_i+1)]` on any segment, and
/// monotone data gives a monotone interpolant.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{FittablePredictor, FritschButland, Predictor};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 0.1, 5.0, 5.1];
///
/// let fb = FritschButland::fitted(&xs, &ys).unwrap();
/// for k in 0..=300 {
///     let y = fb.predict(k as f64 / 100.0);
///     assert!((0.0..=5.1).contains(&y));
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FritschButland {
    cubic: PiecewiseCubic,
}

impl FritschButland {
    /// Creates an empty, unfitted interpolator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying piecewise cubic.
    pub fn cubic(&self) -> &PiecewiseCubic {
        &self.cubic
    }
}

impl Predictor for FritschButland {
    fn predict(&self, x: f64) -> f64 {
        self.cubic.predict(x)
    }
}

impl DerivativePredictor for FritschButland {
    fn predict_derivative(&self, x: f64) -> f64 {
        self.cubic.predict_derivative(x)
    }
}

impl FittablePredictor for FritschButland {
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()> {
        let dydxs = fritsch_butland_derivatives(xs, ys)?;
        self.cubic.fit_with_derivatives(xs, ys, &dydxs)?;
        log::debug!("fitted Fritsch-Butland interpolant on {} nodes", xs.len());
        Ok(())
    }
}

/// Estimates monotonicity-preserving node derivatives.
///
/// # Errors
///
/// Returns an error if the lengths differ, there are fewer than 2 points, or
/// `xs` is not strictly increasing.
pub fn fritsch_butland_derivatives(xs: &[f64], ys: &[f64]) -> InterpResult<Vec<f64>> {
    validate_samples(xs, ys, 2)?;

    let n = xs.len();
    let slopes = secant_slopes(xs, ys);
    if n == 2 {
        return Ok(vec![slopes[0]; 2]);
    }

    let mut dydxs = vec![0.0; n];
    for i in 1..n - 1 {
        // Opposite signs or a flat secant: local extremum, derivative stays 0.
        if slopes[i - 1] * slopes[i] > 0.0 {
            dydxs[i] = 3.0 * (xs[i + 1] - xs[i - 1])
                / ((2.0 * xs[i + 1] - xs[i - 1] - xs[i]) / slopes[i - 1]
                    + (xs[i + 1] + xs[i] - 2.0 * xs[i - 1]) / slopes[i]);
        }
    }
    dydxs[0] = edge_derivative(xs, &slopes, Edge::Left);
    dydxs[n - 1] = edge_derivative(xs, &slopes, Edge::Right);

    Ok(dydxs)
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left,
    Right,
}

/// One-sided three-point estimate at an end node, limited so that it keeps
/// the edge secant's sign and stays within three times its magnitude.
fn edge_derivative(xs: &[f64], slopes: &[f64], edge: Edge) -> f64 {
    let n = xs.len();
    let (d_edge, d_inner, h_edge, h, f) = match edge {
        Edge::Left => {
            let (x_e, x_m, x_i) = (xs[0], xs[1], xs[2]);
            (slopes[0], slopes[1], x_m - x_e, x_i - x_e, x_m + x_i - 2.0 * x_e)
        }
        Edge::Right => {
            let (x_e, x_m, x_i) = (xs[n - 1], xs[n - 2], xs[n - 3]);
            (
                slopes[n - 2],
                slopes[n - 3],
                x_e - x_m,
                x_e - x_i,
                2.0 * x_e - x_i - x_m,
            )
        }
    };

    let g = (f * d_edge - h_edge * d_inner) / h;
    if g * d_edge <= 0.0 {
        return 0.0;
    }
    // Only reachable when the secants change sign.
    if d_edge * d_inner <= 0.0 && g.abs() > (3.0 * d_edge).abs() {
        return 3.0 * d_edge;
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterpError;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_derivatives() {
        let xs = [-2.0, -1.0, 0.5, 1.0, 3.0, 4.0];
        let ys = [0.5, 1.0, 4.0, 3.0, 1.0, 0.0];

        let d = fritsch_butland_derivatives(&xs, &ys).unwrap();
        let expected = [0.0, 10.0 / 13.0, 0.0, -10.0 / 7.0, -1.0, -1.0];
        for (got, want) in d.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_reference_values() {
        let xs = [-2.0, -1.0, 0.5, 1.0, 3.0, 4.0];
        let ys = [0.5, 1.0, 4.0, 3.0, 1.0, 0.0];
        let fb = FritschButland::fitted(&xs, &ys).unwrap();

        let cases = [
            (-1.5, 0.653_846_153_846_153_8, 0.557_692_307_692_307_7),
            (0.25, 3.804_487_179_487_179, 1.474_358_974_358_974),
            (0.75, 3.589_285_714_285_714_4, -2.642_857_142_857_143),
            (2.0, 1.892_857_142_857_142_8, -0.892_857_142_857_143),
            (3.5, 0.5, -1.0),
        ];
        for (x, value, derivative) in cases {
            assert_relative_eq!(fb.predict(x), value, epsilon = 1e-13);
            assert_relative_eq!(fb.predict_derivative(x), derivative, epsilon = 1e-13);
        }
    }

    #[test]
    fn test_extremum_gets_zero_derivative() {
        let d = fritsch_butland_derivatives(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(d[1], 0.0);
        // Edge estimate (3*1 - 1*(-1)) / 2 = 2 has the right sign and is
        // within three times the secant.
        assert_relative_eq!(d[0], 2.0, epsilon = 1e-15);
        assert_relative_eq!(d[2], -2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_edge_limited_to_three_secants() {
        // Tiny first secant followed by a steep drop.
        let xs = [0.0, 1.0, 1.1];
        let ys = [0.0, 1.0, -9.0];
        let d = fritsch_butland_derivatives(&xs, &ys).unwrap();
        assert_relative_eq!(d[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_wrong_sign_clamped_to_zero() {
        // Secants 0.1 then 10: the raw edge estimate turns negative.
        let d = fritsch_butland_derivatives(&[0.0, 1.0, 2.0], &[0.0, 0.1, 10.1]).unwrap();
        assert_eq!(d[0], 0.0);
    }

    #[test]
    fn test_flat_secant_forces_zero() {
        let d = fritsch_butland_derivatives(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(d[1], 0.0);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn test_two_points_is_linear() {
        let fb = FritschButland::fitted(&[0.0, 2.0], &[3.0, -1.0]).unwrap();

        let row = fb.cubic().coefficients().row(0).to_vec();
        assert_eq!(row, vec![3.0, -2.0, 0.0, 0.0]);
        assert_eq!(fb.predict(1.0), 1.0);
    }

    #[test]
    fn test_monotone_data_stays_in_bounds() {
        let xs = [0.0, 0.5, 0.6, 2.0, 5.0, 5.5];
        let ys = [0.0, 0.05, 3.0, 3.1, 9.0, 9.0];
        let fb = FritschButland::fitted(&xs, &ys).unwrap();

        for i in 0..xs.len() - 1 {
            let (lo, hi) = (ys[i].min(ys[i + 1]), ys[i].max(ys[i + 1]));
            for k in 0..=50 {
                let x = xs[i] + (xs[i + 1] - xs[i]) * f64::from(k) / 50.0;
                let y = fb.predict(x);
                assert!(y >= lo - 1e-12 && y <= hi + 1e-12, "overshoot at x = {}: {}", x, y);
            }
        }
    }

    #[test]
    fn test_ordering_error() {
        let mut fb = FritschButland::new();
        assert!(matches!(
            fb.fit(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(InterpError::NotStrictlyIncreasing { index: 2, .. })
        ));
        assert!(!fb.cubic().is_fitted());
    }
}
