//! # Knotwork Interp
//!
//! One-dimensional piecewise-polynomial interpolation.
//!
//! This crate provides:
//!
//! - **Piecewise cubics**: [`PiecewiseCubic`], the shared coefficient table and
//!   evaluator every cubic fitter populates
//! - **Local fitters**: [`AkimaSpline`] and [`FritschButland`] estimate node
//!   derivatives from neighbouring secants, no linear system involved
//! - **Global splines**: [`NaturalCubic`], [`ClampedCubic`], [`NotAKnotCubic`],
//!   all C2, solved through a banded second-derivative system
//! - **Simple predictors**: [`Constant`], [`PiecewiseConstant`], [`PiecewiseLinear`]
//!
//! ## Extrapolation
//!
//! Every predictor is a total function of `x`. Outside the breakpoints the
//! value is held flat: left of the first node the first node's value and
//! derivative are returned, at and right of the last node the last node's.
//!
//! ## Thread safety
//!
//! A fitted interpolator is read-only during prediction and may be shared
//! across threads. Fitting takes `&mut self`, so the borrow checker already
//! serialises fits against reads.
//!
//! ## Example
//!
//! ```rust
//! use knotwork_interp::prelude::*;
//!
//! let xs = [-1.0, 0.0, 2.0, 3.5];
//! let ys = [2.0, 0.0, 2.0, 1.5];
//!
//! let spline = NaturalCubic::fitted(&xs, &ys).unwrap();
//! assert!((spline.predict(-0.5) - 0.766_447_368_421_052_6).abs() < 1e-13);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod local;
pub mod piecewise;
pub mod predictor;
pub mod segment;
pub mod spline;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, InterpError, InterpResult};
    pub use crate::local::{
        akima_derivatives, fritsch_butland_derivatives, AkimaSpline, FritschButland,
    };
    pub use crate::piecewise::{PiecewiseConstant, PiecewiseCubic, PiecewiseLinear};
    pub use crate::predictor::{Constant, DerivativePredictor, FittablePredictor, Predictor};
    pub use crate::spline::{
        BoundaryCondition, Clamped, ClampedCubic, CubicSpline, Natural, NaturalCubic, NotAKnot,
        NotAKnotCubic, SecondDerivativeSystem,
    };
}

pub use error::{ErrorKind, InterpError, InterpResult};
pub use local::{akima_derivatives, fritsch_butland_derivatives, AkimaSpline, FritschButland};
pub use piecewise::{PiecewiseConstant, PiecewiseCubic, PiecewiseLinear};
pub use predictor::{Constant, DerivativePredictor, FittablePredictor, Predictor};
pub use spline::{
    BoundaryCondition, Clamped, ClampedCubic, CubicSpline, Natural, NaturalCubic, NotAKnot,
    NotAKnotCubic, SecondDerivativeSystem,
};
