//! Errors for log-domain arithmetic.
//!
//! This module defines [`LogError`], the error type returned by the fallible
//! log-space primitives in [`crate::numerics::log_space`], together with the
//! [`LogResult`] alias. It implements `Display`/`Error` and converts to
//! `PyErr` when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - Operands are reported exactly as passed in, already in log space.
//! - Only genuinely undefined operations are errors; underflow is not an
//!   error and is mapped to `LOG_ZERO` by the callers instead.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for log-domain operations that may produce [`LogError`].
pub type LogResult<T> = Result<T, LogError>;

/// Unified error type for log-domain arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum LogError {
    /// `log_sub(log_a, log_b)` was called with `log_a < log_b`, i.e. the
    /// difference of the underlying probabilities would be negative.
    DomainError { log_a: f64, log_b: f64 },
}

impl std::error::Error for LogError {}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::DomainError { log_a, log_b } => {
                write!(
                    f,
                    "Log subtraction requires log_a >= log_b; got log_a = {log_a}, log_b = {log_b}"
                )
            }
        }
    }
}

/// Convert a [`LogError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<LogError> for PyErr {
    fn from(err: LogError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
