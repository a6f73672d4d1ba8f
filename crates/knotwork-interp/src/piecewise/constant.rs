//! Piecewise constant interpolation.

use crate::error::InterpResult;
use crate::predictor::{FittablePredictor, Predictor};
use crate::segment::{locate, validate_samples};

/// A left-continuous step function through the samples.
///
/// On `(xs[i], xs[i + 1]]` the prediction is `ys[i + 1]`. Left of the data it
/// is `ys[0]`, right of it `ys[last]`.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{FittablePredictor, PiecewiseConstant, Predictor};
///
/// let steps = PiecewiseConstant::fitted(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(steps.predict(0.5), 6.0);
/// assert_eq!(steps.predict(1.0), 6.0);
/// assert_eq!(steps.predict(1.01), 7.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiecewiseConstant {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PiecewiseConstant {
    /// Creates an empty, unfitted step function.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        !self.xs.is_empty()
    }
}

impl Predictor for PiecewiseConstant {
    fn predict(&self, x: f64) -> f64 {
        assert!(
            self.is_fitted(),
            "piecewise constant interpolator evaluated before a successful fit"
        );
        match locate(&self.xs, x) {
            None => self.ys[0],
            Some(i) if x == self.xs[i] || i == self.xs.len() - 1 => self.ys[i],
            Some(i) => self.ys[i + 1],
        }
    }
}

impl FittablePredictor for PiecewiseConstant {
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()> {
        validate_samples(xs, ys, 2)?;

        self.xs = xs.to_vec();
        self.ys = ys.to_vec();
        log::debug!("fitted piecewise constant interpolator on {} nodes", xs.len());
        Ok(())
    }
}
