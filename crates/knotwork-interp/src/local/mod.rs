//! Local cubic fitters.
//!
//! These estimate a derivative at every node from nearby secants only and
//! hand the result to [`PiecewiseCubic::fit_with_derivatives`]. No linear
//! system is solved, so moving one sample only changes the curve on a few
//! neighbouring segments.
//!
//! | Fitter | Smoothness | Monotone | Overshoot |
//! |--------|------------|----------|-----------|
//! | Akima | C1 | No | Small, suppressed near outliers |
//! | Fritsch-Butland | C1 | **Yes** | None |
//!
//! [`PiecewiseCubic::fit_with_derivatives`]: crate::PiecewiseCubic::fit_with_derivatives

mod akima;
mod fritsch_butland;

pub use akima::{akima_derivatives, AkimaSpline};
pub use fritsch_butland::{fritsch_butland_derivatives, FritschButland};
