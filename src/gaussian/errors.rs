//! Errors for diagonal Gaussian models (argument checks, vector lengths, and
//! log-domain failures).
//!
//! This module defines [`GaussianError`] and the [`GaussianResult`] alias used
//! by every fallible operation on [`crate::gaussian::DiagGaussian`]. The type
//! implements `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - Lengths are reported as `expected` (the model's dimensionality) and
//!   `actual` (the length the caller supplied).
//! - `what` names the vector involved (`"mean"`, `"variance"`, `"sample"`, ...)
//!   so a single variant serves every setter, accessor, and evaluation path.
//! - A failed operation never leaves the model partially updated.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::numerics::errors::LogError;

/// Crate-wide result alias for Gaussian operations that may produce
/// [`GaussianError`].
pub type GaussianResult<T> = Result<T, GaussianError>;

/// Unified error type for diagonal Gaussian models.
#[derive(Debug, Clone, PartialEq)]
pub enum GaussianError {
    // ---- Scalar arguments ----
    /// A scalar parameter is outside its legal domain (negative
    /// dimensionality, non-finite flooring factor, ...).
    InvalidArgument { name: &'static str, value: f64, reason: &'static str },

    // ---- Vector shapes ----
    /// A supplied vector's length differs from the model's dimensionality.
    DimensionMismatch { what: &'static str, expected: usize, actual: usize },

    // ---- Log-domain arithmetic ----
    /// Wrapper for [`LogError`] raised while combining log-probabilities.
    ///
    /// Model operations never produce this variant themselves. It exists so
    /// that callers mixing [`crate::numerics::log_sub`] with model scores can
    /// propagate both failure kinds with `?` inside one `GaussianResult`.
    Log(LogError),
}

impl std::error::Error for GaussianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GaussianError::Log(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GaussianError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Scalar arguments ----
            GaussianError::InvalidArgument { name, value, reason } => {
                write!(f, "Invalid argument {name} = {value}: {reason}")
            }
            // ---- Vector shapes ----
            GaussianError::DimensionMismatch { what, expected, actual } => {
                write!(f, "Dimension mismatch for {what}: expected {expected}, got {actual}")
            }
            // ---- Log-domain arithmetic ----
            GaussianError::Log(err) => write!(f, "{err}"),
        }
    }
}

impl From<LogError> for GaussianError {
    fn from(err: LogError) -> GaussianError {
        GaussianError::Log(err)
    }
}

/// Convert a [`GaussianError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface model errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GaussianError> for PyErr {
    fn from(err: GaussianError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
