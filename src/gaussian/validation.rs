//! Gaussian validation helpers — reusable checks for lengths and parameters.
//!
//! Purpose
//! -------
//! Centralize the small checks every [`DiagGaussian`] mutator, accessor and
//! evaluation path performs before touching model state, so that failures
//! surface as structured [`GaussianError`] values and the model is never left
//! half-updated.
//!
//! Key behaviors
//! -------------
//! - Compare supplied vector lengths against the model dimensionality.
//! - Validate scalar parameters (signed dimensionality, flooring factor,
//!   default floor).
//! - Validate vector entries (finite means, finite non-negative thresholds,
//!   finite variances that are strictly positive once floored).
//!
//! Conventions
//! -----------
//! - Helpers return the validated value where that is convenient for the
//!   caller (`validate_n_inputs`, `validate_default_threshold`).
//! - This module contains no I/O and no logging.
//!
//! [`DiagGaussian`]: crate::gaussian::DiagGaussian
use crate::gaussian::errors::{GaussianError, GaussianResult};
use ndarray::ArrayView1;

/// Check that a vector named `what` has the model's dimensionality.
///
/// Errors
/// ------
/// - `GaussianError::DimensionMismatch` when `actual != expected`.
pub fn validate_length(what: &'static str, expected: usize, actual: usize) -> GaussianResult<()> {
    if actual != expected {
        return Err(GaussianError::DimensionMismatch { what, expected, actual });
    }
    Ok(())
}

/// Convert a signed dimensionality into a `usize`, rejecting negatives.
///
/// Errors
/// ------
/// - `GaussianError::InvalidArgument` when `n_inputs < 0`.
pub fn validate_n_inputs(n_inputs: i64) -> GaussianResult<usize> {
    usize::try_from(n_inputs).map_err(|_| GaussianError::InvalidArgument {
        name: "n_inputs",
        value: n_inputs as f64,
        reason: "dimensionality must be >= 0",
    })
}

/// Validate the default variance floor used by `resize`.
///
/// Errors
/// ------
/// - `GaussianError::InvalidArgument` unless the value is finite and `> 0`.
pub fn validate_default_threshold(value: f64) -> GaussianResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GaussianError::InvalidArgument {
            name: "default_threshold",
            value,
            reason: "default variance floor must be finite and > 0",
        });
    }
    Ok(value)
}

/// Validate the multiplier used to derive thresholds from the variance.
///
/// Errors
/// ------
/// - `GaussianError::InvalidArgument` unless `factor` is finite and `>= 0`.
pub fn validate_threshold_factor(factor: f64) -> GaussianResult<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(GaussianError::InvalidArgument {
            name: "factor",
            value: factor,
            reason: "threshold factor must be finite and >= 0",
        });
    }
    Ok(())
}

/// Validate mean entries: every coordinate must be finite.
pub fn validate_mean(mean: ArrayView1<f64>) -> GaussianResult<()> {
    match mean.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(GaussianError::InvalidArgument {
            name: "mean",
            value,
            reason: "mean entries must be finite",
        }),
        None => Ok(()),
    }
}

/// Validate threshold entries: every floor must be finite and `>= 0`.
pub fn validate_thresholds(thresholds: ArrayView1<f64>) -> GaussianResult<()> {
    match thresholds.iter().find(|v| !v.is_finite() || **v < 0.0) {
        Some(&value) => Err(GaussianError::InvalidArgument {
            name: "variance_thresholds",
            value,
            reason: "variance thresholds must be finite and >= 0",
        }),
        None => Ok(()),
    }
}

/// Validate a variance vector *after* flooring: every entry must be finite
/// and strictly positive so that `ln(variance)` and the Mahalanobis term are
/// well-defined.
pub fn validate_floored_variance(variance: ArrayView1<f64>) -> GaussianResult<()> {
    match variance.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        Some(&value) => Err(GaussianError::InvalidArgument {
            name: "variance",
            value,
            reason: "variance must be finite and > 0 after flooring",
        }),
        None => Ok(()),
    }
}
