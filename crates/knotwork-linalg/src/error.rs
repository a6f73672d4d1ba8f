//! Error types for linear-system solves.

use thiserror::Error;

/// A specialized Result type for linear-algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors that can occur while solving a linear system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular (a pivot vanished during elimination).
    #[error("Singular matrix: zero pivot at row {row}")]
    SingularMatrix {
        /// Row at which elimination broke down.
        row: usize,
    },

    /// Operand lengths are incompatible with the matrix order.
    #[error("Incompatible dimensions: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length implied by the matrix.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl LinalgError {
    /// Creates a singular matrix error.
    #[must_use]
    pub fn singular(row: usize) -> Self {
        Self::SingularMatrix { row }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
