//! Piecewise-polynomial representations.
//!
//! - [`PiecewiseCubic`]: the cubic coefficient table shared by every cubic
//!   fitter, fitted directly from node derivatives
//! - [`PiecewiseLinear`]: straight lines between samples
//! - [`PiecewiseConstant`]: a left-continuous step function

mod constant;
mod cubic;
mod linear;

pub use constant::PiecewiseConstant;
pub use cubic::PiecewiseCubic;
pub use linear::PiecewiseLinear;
