//! Error types for interpolation.

use knotwork_linalg::LinalgError;
use thiserror::Error;

/// A specialized Result type for interpolation.
pub type InterpResult<T> = Result<T, InterpError>;

/// Broad classification of an [`InterpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input lengths disagree or are too short.
    Shape,
    /// Abscissas are not finite or not strictly increasing.
    Ordering,
    /// The linear system of a global fitter could not be solved.
    Numerical,
}

/// Errors that can occur while fitting an interpolator.
///
/// Every fit validates its input before touching any state, so an `Err`
/// always leaves the interpolator exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpError {
    /// An input slice does not have as many entries as `xs`.
    #[error("Length mismatch: {name} has {actual} entries, xs has {expected}")]
    LengthMismatch {
        /// Name of the offending input.
        name: &'static str,
        /// Number of abscissas.
        expected: usize,
        /// Length of the offending input.
        actual: usize,
    },

    /// Insufficient data points for the fitter.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Abscissas are not strictly increasing.
    #[error("x values must be strictly increasing: xs[{index}] = {current} follows {previous}")]
    NotStrictlyIncreasing {
        /// Index of the first offending abscissa.
        index: usize,
        /// The abscissa before it.
        previous: f64,
        /// The offending abscissa.
        current: f64,
    },

    /// An abscissa is infinite or NaN.
    #[error("x values must be finite: xs[{index}] = {value}")]
    NonFiniteAbscissa {
        /// Index of the offending abscissa.
        index: usize,
        /// The offending abscissa.
        value: f64,
    },

    /// The second-derivative system could not be solved.
    #[error("Spline system could not be solved: {0}")]
    Solve(#[from] LinalgError),
}

impl InterpError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an ordering error for `xs[index]`.
    #[must_use]
    pub fn not_strictly_increasing(index: usize, previous: f64, current: f64) -> Self {
        Self::NotStrictlyIncreasing {
            index,
            previous,
            current,
        }
    }

    /// Creates an error for a non-finite `xs[index]`.
    #[must_use]
    pub fn non_finite_abscissa(index: usize, value: f64) -> Self {
        Self::NonFiniteAbscissa { index, value }
    }

    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } | Self::InsufficientData { .. } => ErrorKind::Shape,
            Self::NotStrictlyIncreasing { .. } | Self::NonFiniteAbscissa { .. } => {
                ErrorKind::Ordering
            }
            Self::Solve(_) => ErrorKind::Numerical,
        }
    }
}
