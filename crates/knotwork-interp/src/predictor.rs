//! Predictor traits.
//!
//! Interpolators are split along what they can do rather than how they are
//! built: every one of them predicts, most also predict derivatives, and the
//! ones that need nothing beyond `(xs, ys)` can be fitted generically.

use crate::error::InterpResult;

/// A function of one real variable.
pub trait Predictor: Send + Sync {
    /// Returns the predicted value at `x`.
    fn predict(&self, x: f64) -> f64;

    /// Predicts every point of `xs`.
    fn predict_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// A predictor that also knows its first derivative.
pub trait DerivativePredictor: Predictor {
    /// Returns the first derivative at `x`.
    fn predict_derivative(&self, x: f64) -> f64;
}

/// A predictor fitted from samples alone.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::{AkimaSpline, FittablePredictor, Predictor};
///
/// let mut akima = AkimaSpline::new();
/// akima.fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
/// assert_eq!(akima.predict(1.0), 1.0);
/// ```
pub trait FittablePredictor: Predictor {
    /// Fits the predictor to `(xs, ys)`.
    ///
    /// On error the predictor keeps whatever state it had before the call.
    fn fit(&mut self, xs: &[f64], ys: &[f64]) -> InterpResult<()>;

    /// Builds a default instance and fits it.
    fn fitted(xs: &[f64], ys: &[f64]) -> InterpResult<Self>
    where
        Self: Sized + Default,
    {
        let mut predictor = Self::default();
        predictor.fit(xs, ys)?;
        Ok(predictor)
    }
}

/// A predictor that returns the same value everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant(pub f64);

impl Predictor for Constant {
    fn predict(&self, _x: f64) -> f64 {
        self.0
    }
}

impl DerivativePredictor for Constant {
    fn predict_derivative(&self, _x: f64) -> f64 {
        0.0
    }
}
