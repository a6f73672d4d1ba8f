//! Segment location and sample validation.
//!
//! Every fitter funnels its input through [`validate_samples`] before it
//! computes anything, and every evaluator finds its segment with [`locate`].

use crate::error::{InterpError, InterpResult};

/// Finds the segment containing `x`.
///
/// Returns `Some(i)` with `xs[i] <= x < xs[i + 1]`, `Some(xs.len() - 1)` when
/// `x >= xs[last]`, and `None` when `x < xs[0]` (or `x` is NaN). Callers must
/// treat the last index as "at or beyond the final node", not as a segment.
///
/// `xs` must be sorted in ascending order.
///
/// # Example
///
/// ```rust
/// use knotwork_interp::segment::locate;
///
/// let xs = [0.0, 1.0, 2.0];
/// assert_eq!(locate(&xs, -0.5), None);
/// assert_eq!(locate(&xs, 0.0), Some(0));
/// assert_eq!(locate(&xs, 1.5), Some(1));
/// assert_eq!(locate(&xs, 2.0), Some(2));
/// ```
pub fn locate(xs: &[f64], x: f64) -> Option<usize> {
    // First breakpoint strictly greater than x, minus one.
    xs.partition_point(|&breakpoint| breakpoint <= x).checked_sub(1)
}

/// Checks that `values` has one entry per abscissa.
pub(crate) fn check_length(name: &'static str, n: usize, values: &[f64]) -> InterpResult<()> {
    if values.len() != n {
        return Err(InterpError::length_mismatch(name, n, values.len()));
    }
    Ok(())
}

/// Checks that `xs` is finite and strictly increasing.
pub(crate) fn check_strictly_increasing(xs: &[f64]) -> InterpResult<()> {
    for (i, &x) in xs.iter().enumerate() {
        if !x.is_finite() {
            return Err(InterpError::non_finite_abscissa(i, x));
        }
        if i > 0 && x <= xs[i - 1] {
            return Err(InterpError::not_strictly_increasing(i, xs[i - 1], x));
        }
    }
    Ok(())
}

/// Runs the common up-front checks: lengths, then size, then ordering.
pub(crate) fn validate_samples(xs: &[f64], ys: &[f64], min_points: usize) -> InterpResult<()> {
    check_length("ys", xs.len(), ys)?;
    if xs.len() < min_points {
        return Err(InterpError::insufficient_data(min_points, xs.len()));
    }
    check_strictly_increasing(xs)
}

/// Computes the `n - 1` secant slopes of already validated samples.
pub(crate) fn secant_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect()
}
