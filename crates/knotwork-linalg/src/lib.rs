//! # Knotwork Linalg
//!
//! Linear-system plumbing for the Knotwork interpolation library.
//!
//! This crate provides:
//!
//! - **Banded matrices**: [`BandMatrix`] with a partial-pivoting LU solve
//! - **Tridiagonal systems**: the O(n) Thomas algorithm, [`solve_tridiagonal`]
//! - **Configuration**: [`BandSolverConfig`] controls when a pivot counts as zero
//!
//! Spline fitting only ever needs bandwidths of one or two, so everything here
//! runs in time linear in the system size.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod banded;
pub mod error;
pub mod tridiagonal;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::banded::{BandMatrix, BandSolverConfig, DEFAULT_PIVOT_TOLERANCE};
    pub use crate::error::{LinalgError, LinalgResult};
    pub use crate::tridiagonal::{solve_tridiagonal, solve_tridiagonal_with};
}

pub use banded::{BandMatrix, BandSolverConfig, DEFAULT_PIVOT_TOLERANCE};
pub use error::{LinalgError, LinalgResult};
pub use tridiagonal::{solve_tridiagonal, solve_tridiagonal_with};
