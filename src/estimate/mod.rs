//! Online linear estimation: recursive least squares with exponential forgetting.
//!
//! [`Rls`] maintains a weight matrix `W` (inputs × outputs) and an
//! inverse-covariance matrix `P`, refining both every time a new
//! `(input, output)` pair arrives. Inputs and outputs are column vectors
//! held in [`DynMatrix`](crate::DynMatrix); all shape problems are reported
//! as [`EstimateError::DimensionMismatch`] rather than panics.
//!
//! # Recursive Least Squares
//!
//! ```
//! use numeris_rls::estimate::Rls;
//! use numeris_rls::DynMatrix;
//!
//! // 1 output, 2 inputs, start from zero weights.
//! let w0 = DynMatrix::zeros(2, 1, 0.0_f64);
//! let mut rls = Rls::with_weights(w0, 1.0, 1.0e6).unwrap();
//!
//! // y = 3·x0 − x1
//! for t in 0..20 {
//!     let x0 = (t as f64 * 0.7).sin();
//!     let x1 = 1.0;
//!     let x = DynMatrix::from_column(&[x0, x1]);
//!     let y = DynMatrix::from_column(&[3.0 * x0 - x1]);
//!     rls.update(&x, &y).unwrap();
//! }
//!
//! let y_hat = rls.predict(&DynMatrix::from_column(&[0.5, 1.0])).unwrap();
//! assert!((y_hat[(0, 0)] - 0.5).abs() < 1e-3);
//! ```

mod rls;


pub use rls::{Rls, RlsConfig};

use crate::dynmatrix::DimensionMismatch;

/// Errors from the estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// An input, output, weight or covariance matrix has the wrong shape.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// Input or output dimension is zero.
    ZeroDimension,
    /// Forgetting factor is not a finite value in `(0, 1]`.
    InvalidForgettingFactor,
    /// Initial uncertainty is not a finite positive value.
    InvalidUncertainty,
}

impl From<DimensionMismatch> for EstimateError {
    fn from(e: DimensionMismatch) -> Self {
        EstimateError::DimensionMismatch {
            expected: e.expected,
            got: e.got,
        }
    }
}

impl core::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EstimateError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            EstimateError::ZeroDimension => {
                write!(f, "input and output dimensions must be positive")
            }
            EstimateError::InvalidForgettingFactor => {
                write!(f, "forgetting factor must be finite and in (0, 1]")
            }
            EstimateError::InvalidUncertainty => {
                write!(f, "initial uncertainty must be finite and positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EstimateError {}
