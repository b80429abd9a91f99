//! Gaussian options — configuration for default variance flooring.
//!
//! Purpose
//! -------
//! Hold the configuration knobs that shape how a [`DiagGaussian`] initializes
//! itself, validated once at construction so model code can rely on them.
//! Today that is the default per-dimension variance floor applied by
//! `resize`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `default_threshold` is finite and strictly positive, so a freshly sized
//!   model always has strictly positive floored variances and a finite
//!   normalization constant.
//!
//! Testing notes
//! -------------
//! - Unit tests check the default value and the rejection of zero, negative
//!   and non-finite thresholds. How the floor is applied is tested in
//!   `gaussian::model`.
//!
//! [`DiagGaussian`]: crate::gaussian::DiagGaussian
use crate::gaussian::{errors::GaussianResult, validation::validate_default_threshold};

/// Default variance floor used when thresholds are not set explicitly.
pub const DEFAULT_VARIANCE_THRESHOLD: f64 = f64::EPSILON;

/// GaussianOptions — construction-time configuration for diagonal Gaussians.
///
/// Fields
/// ------
/// - `default_threshold`: `f64`
///   Variance floor written to every dimension by `resize`. Finite and > 0.
///
/// Notes
/// -----
/// - Options are copied into each model; changing them later requires a new
///   model (or `with_options`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianOptions {
    /// Per-dimension variance floor installed by `resize`.
    pub default_threshold: f64,
}

impl GaussianOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::InvalidArgument`
    ///   Returned when `default_threshold` is not finite or is `<= 0.0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_gaussian::gaussian::options::GaussianOptions;
    /// let opts = GaussianOptions::new(1e-6).unwrap();
    /// assert_eq!(opts.default_threshold, 1e-6);
    /// assert!(GaussianOptions::new(0.0).is_err());
    /// ```
    pub fn new(default_threshold: f64) -> GaussianResult<Self> {
        let default_threshold = validate_default_threshold(default_threshold)?;
        Ok(GaussianOptions { default_threshold })
    }
}

impl Default for GaussianOptions {
    fn default() -> Self {
        GaussianOptions { default_threshold: DEFAULT_VARIANCE_THRESHOLD }
    }
}
