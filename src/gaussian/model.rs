//! Diagonal Gaussian model — state, flooring, cached normalization, and
//! log-likelihood evaluation.
//!
//! Purpose
//! -------
//! Implement a multivariate Gaussian with diagonal covariance whose
//! log-density can be evaluated repeatedly and cheaply on single feature
//! vectors. All configuration goes through validated mutators that keep the
//! vectors sized consistently, floor the variance on write, and refresh a
//! cached normalization constant eagerly.
//!
//! Key behaviors
//! -------------
//! - [`DiagGaussian::resize`] sizes the model, resetting mean to zeros,
//!   variance to ones and thresholds to the configured default floor.
//! - Variance setters store `max(variance[i], threshold[i])`; flooring
//!   happens on write, never on read.
//! - Every mutation touching dimensionality, variance or thresholds
//!   recomputes `g_norm = n · ln(2π) + Σ ln σ²_i` before returning.
//! - [`DiagGaussian::log_likelihood`] evaluates
//!   `-½ (g_norm + Σ (x_i - μ_i)² / σ²_i)` in a single pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - `mean.len() == variance.len() == variance_thresholds.len() == n_inputs`.
//! - `variance[i] >= variance_thresholds[i]` and `variance[i] > 0` for all `i`.
//! - `g_norm` is consistent with `variance` and `n_inputs` whenever control
//!   returns to the caller.
//! - Mutators validate first and commit last: an `Err` leaves the model
//!   exactly as it was.
//!
//! Conventions
//! -----------
//! - Vectors are exchanged as `ndarray` views; copy-out accessors write into
//!   caller-provided buffers and fail on length mismatch.
//! - The model is a plain value: `Clone` produces a fully independent copy.
//!   It has no interior mutability, so `&mut self` on mutators is the only
//!   synchronization it needs.
//! - This module performs no I/O; `DiagGaussian::report` (feature
//!   `obs_slog`) is the only diagnostic output.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin down `resize` defaults, flooring order, setter
//!   idempotence, copy semantics, all `DimensionMismatch` paths, and compare
//!   log-likelihoods against `statrs` univariate normals.
//! - `report` is covered by a smoke test compiled only with `obs_slog`
//!   (`cargo test --features obs_slog`); it checks the call path, not the
//!   stderr contents, which mirror `Display`.
use crate::{
    gaussian::{
        errors::GaussianResult,
        machine::Machine,
        options::GaussianOptions,
        validation::{
            validate_floored_variance, validate_length, validate_mean, validate_n_inputs,
            validate_threshold_factor, validate_thresholds,
        },
    },
    numerics::log_space::LOG_2PI,
};
use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};

/// DiagGaussian — multivariate normal distribution with diagonal covariance.
///
/// Fields
/// ------
/// - `mean`: `Array1<f64>`
///   Mean vector μ.
/// - `variance`: `Array1<f64>`
///   Diagonal of the covariance matrix (σ²), already floored.
/// - `variance_thresholds`: `Array1<f64>`
///   Per-dimension variance floors.
/// - `g_norm`: `f64`
///   Cached `n_inputs · ln(2π) + Σ ln σ²_i`, so that
///   `ln p(x) = -½ (g_norm + Σ (x_i - μ_i)² / σ²_i)`.
/// - `n_inputs`: `usize`
///   Feature dimensionality; `0` means unconfigured.
/// - `options`: [`GaussianOptions`]
///   Construction-time configuration (default variance floor).
///
/// Performance
/// -----------
/// - Evaluation is a single O(n) pass with no allocation.
/// - Setters allocate one scratch vector so a failed validation cannot leave
///   partially written state behind.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagGaussian {
    mean: Array1<f64>,
    variance: Array1<f64>,
    variance_thresholds: Array1<f64>,
    g_norm: f64,
    n_inputs: usize,
    options: GaussianOptions,
}

impl Default for DiagGaussian {
    fn default() -> Self {
        DiagGaussian::new(0)
    }
}

impl DiagGaussian {
    /// Construct a model of dimensionality `n_inputs` with zero mean, unit
    /// variance and the default variance floor.
    pub fn new(n_inputs: usize) -> Self {
        DiagGaussian::with_options(n_inputs, GaussianOptions::default())
    }

    /// Construct a model of dimensionality `n_inputs` using custom
    /// [`GaussianOptions`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_gaussian::gaussian::{DiagGaussian, GaussianOptions};
    /// let opts = GaussianOptions::new(1e-4).unwrap();
    /// let g = DiagGaussian::with_options(2, opts);
    /// assert_eq!(g.variance_thresholds().to_vec(), vec![1e-4, 1e-4]);
    /// ```
    pub fn with_options(n_inputs: usize, options: GaussianOptions) -> Self {
        let mut model = DiagGaussian {
            mean: Array1::zeros(0),
            variance: Array1::zeros(0),
            variance_thresholds: Array1::zeros(0),
            g_norm: 0.0,
            n_inputs: 0,
            options,
        };
        model.reset(n_inputs);
        model
    }

    /// Set the dimensionality, reset the mean to zero, the variance to one,
    /// and the thresholds to the default floor.
    ///
    /// Returns
    /// -------
    /// `GaussianResult<()>`
    ///   Always `Ok(())` for a `usize` dimensionality; the `Result` keeps the
    ///   signature uniform with [`DiagGaussian::resize_signed`] and the other
    ///   mutators.
    pub fn resize(&mut self, n_inputs: usize) -> GaussianResult<()> {
        self.reset(n_inputs);
        Ok(())
    }

    /// [`DiagGaussian::resize`] for callers holding a signed dimensionality
    /// (e.g. values arriving from Python or a config file).
    ///
    /// Errors
    /// ------
    /// - `GaussianError::InvalidArgument` when `n_inputs < 0`; the model is
    ///   left unchanged.
    pub fn resize_signed(&mut self, n_inputs: i64) -> GaussianResult<()> {
        let n_inputs = validate_n_inputs(n_inputs)?;
        self.resize(n_inputs)
    }

    /// Alias for [`DiagGaussian::resize`].
    pub fn set_n_inputs(&mut self, n_inputs: usize) -> GaussianResult<()> {
        self.resize(n_inputs)
    }

    /// Replace the mean vector.
    ///
    /// The normalization constant does not depend on the mean and is left
    /// untouched.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `mean.len() != n_inputs`.
    /// - `GaussianError::InvalidArgument` if any entry is not finite.
    pub fn set_mean(&mut self, mean: ArrayView1<f64>) -> GaussianResult<()> {
        validate_length("mean", self.n_inputs, mean.len())?;
        validate_mean(mean)?;
        self.mean.assign(&mean);
        Ok(())
    }

    /// Replace the variance, flooring each entry against the current
    /// thresholds, then recompute the normalization constant.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `variance.len() != n_inputs`.
    /// - `GaussianError::InvalidArgument` if an entry is NaN/±∞ or is still
    ///   `<= 0` after flooring (only possible with zero thresholds).
    pub fn set_variance(&mut self, variance: ArrayView1<f64>) -> GaussianResult<()> {
        validate_length("variance", self.n_inputs, variance.len())?;
        let floored = floor_variance(variance, self.variance_thresholds.view());
        validate_floored_variance(floored.view())?;
        self.variance = floored;
        self.pre_compute_constants();
        Ok(())
    }

    /// Replace the per-dimension variance floors, re-floor the current
    /// variance against them, and recompute the normalization constant.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if the length differs from
    ///   `n_inputs`.
    /// - `GaussianError::InvalidArgument` if any threshold is negative or not
    ///   finite.
    pub fn set_variance_thresholds(&mut self, thresholds: ArrayView1<f64>) -> GaussianResult<()> {
        validate_length("variance_thresholds", self.n_inputs, thresholds.len())?;
        validate_thresholds(thresholds)?;
        self.apply_thresholds(thresholds.to_owned())
    }

    /// Set every threshold to `factor · variance[i]`, using the variance as it
    /// is stored *before* this call, then re-floor and recompute as
    /// [`DiagGaussian::set_variance_thresholds`] does.
    ///
    /// With `factor > 1` every variance is raised to its new floor; with
    /// `factor <= 1` the stored variance is unchanged.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::InvalidArgument` if `factor` is negative or not
    ///   finite.
    pub fn set_variance_thresholds_factor(&mut self, factor: f64) -> GaussianResult<()> {
        validate_threshold_factor(factor)?;
        let thresholds = &self.variance * factor;
        self.apply_thresholds(thresholds)
    }

    /// Copy the mean into `out`.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `out.len() != n_inputs`.
    pub fn get_mean(&self, out: ArrayViewMut1<f64>) -> GaussianResult<()> {
        copy_out("mean", &self.mean, out)
    }

    /// Copy the (floored) variance into `out`.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `out.len() != n_inputs`.
    pub fn get_variance(&self, out: ArrayViewMut1<f64>) -> GaussianResult<()> {
        copy_out("variance", &self.variance, out)
    }

    /// Copy the variance thresholds into `out`.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `out.len() != n_inputs`.
    pub fn get_variance_thresholds(&self, out: ArrayViewMut1<f64>) -> GaussianResult<()> {
        copy_out("variance_thresholds", &self.variance_thresholds, out)
    }

    /// Log-likelihood of one feature vector.
    ///
    /// Computes `-½ (g_norm + Σ_i (x_i - μ_i)² / σ²_i)`.
    ///
    /// Errors
    /// ------
    /// - `GaussianError::DimensionMismatch` if `sample.len() != n_inputs`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_gaussian::gaussian::DiagGaussian;
    /// # use rust_gaussian::numerics::LOG_2PI;
    /// # use ndarray::array;
    /// let g = DiagGaussian::new(1);
    /// let ll = g.log_likelihood(array![0.0].view()).unwrap();
    /// assert!((ll + 0.5 * LOG_2PI).abs() < 1e-12);
    /// ```
    pub fn log_likelihood(&self, sample: ArrayView1<f64>) -> GaussianResult<f64> {
        validate_length("sample", self.n_inputs, sample.len())?;
        let mahalanobis = Zip::from(&sample)
            .and(&self.mean)
            .and(&self.variance)
            .fold(0.0, |acc, &x, &mu, &var| acc + (x - mu) * (x - mu) / var);
        Ok(-0.5 * (self.g_norm + mahalanobis))
    }

    /// [`DiagGaussian::log_likelihood`] for single-precision feature vectors.
    /// Each coordinate is widened to `f64` before use.
    pub fn log_likelihood_f32(&self, sample: ArrayView1<f32>) -> GaussianResult<f64> {
        validate_length("sample", self.n_inputs, sample.len())?;
        let mahalanobis =
            Zip::from(&sample).and(&self.mean).and(&self.variance).fold(0.0, |acc, &x, &mu, &var| {
                let d = f64::from(x) - mu;
                acc + d * d / var
            });
        Ok(-0.5 * (self.g_norm + mahalanobis))
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    pub fn variance(&self) -> ArrayView1<'_, f64> {
        self.variance.view()
    }

    pub fn variance_thresholds(&self) -> ArrayView1<'_, f64> {
        self.variance_thresholds.view()
    }

    /// Cached normalization term `n · ln(2π) + Σ ln σ²_i`.
    pub fn g_norm(&self) -> f64 {
        self.g_norm
    }

    pub fn options(&self) -> GaussianOptions {
        self.options
    }

    /// Write the mean and variance to stderr.
    #[cfg(feature = "obs_slog")]
    pub fn report(&self) {
        eprintln!("{self}");
    }

    // ---- Helper Methods ----

    fn reset(&mut self, n_inputs: usize) {
        self.n_inputs = n_inputs;
        self.mean = Array1::zeros(n_inputs);
        self.variance = Array1::ones(n_inputs);
        self.variance_thresholds = Array1::from_elem(n_inputs, self.options.default_threshold);
        self.pre_compute_constants();
    }

    /// Commit already-validated thresholds and the variance re-floored
    /// against them.
    fn apply_thresholds(&mut self, thresholds: Array1<f64>) -> GaussianResult<()> {
        let floored = floor_variance(self.variance.view(), thresholds.view());
        validate_floored_variance(floored.view())?;
        self.variance_thresholds = thresholds;
        self.variance = floored;
        self.pre_compute_constants();
        Ok(())
    }

    fn pre_compute_constants(&mut self) {
        let log_det: f64 = self.variance.iter().map(|v| v.ln()).sum();
        self.g_norm = self.n_inputs as f64 * LOG_2PI + log_det;
    }
}

impl Machine for DiagGaussian {
    fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    fn forward(&self, sample: ArrayView1<f64>) -> GaussianResult<f64> {
        self.log_likelihood(sample)
    }
}

impl std::fmt::Display for DiagGaussian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mean: {}", self.mean)?;
        write!(f, "Variance: {}", self.variance)
    }
}

/// Elementwise `max(variance, threshold)`. NaN variances are propagated (not
/// replaced by the threshold) so validation can reject them.
fn floor_variance(variance: ArrayView1<f64>, thresholds: ArrayView1<f64>) -> Array1<f64> {
    Zip::from(&variance).and(&thresholds).map_collect(|&v, &t| if v < t { t } else { v })
}

fn copy_out(
    what: &'static str, source: &Array1<f64>, mut out: ArrayViewMut1<f64>,
) -> GaussianResult<()> {
    validate_length(what, source.len(), out.len())?;
    out.assign(source);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::errors::GaussianError;
    use approx::assert_relative_eq;
    use ndarray::array;
    use statrs::distribution::{Continuous, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `resize` defaults and the unconfigured (n = 0) state.
    // - Flooring order for `set_variance`, `set_variance_thresholds`, and the
    //   factor form, including the documented two-dimensional walkthrough.
    // - Eager recomputation of `g_norm` and idempotence of `set_variance`.
    // - Every `DimensionMismatch` path, and that failures leave state intact.
    // - Log-likelihood values against closed forms and `statrs` normals.
    // - Value semantics of `Clone`.
    //
    // They intentionally DO NOT cover:
    // - Log-domain combination of several model scores; see
    //   `numerics::log_space` and the integration tests.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    fn configured(mean: Array1<f64>, variance: Array1<f64>) -> DiagGaussian {
        let mut g = DiagGaussian::new(mean.len());
        g.set_mean(mean.view()).expect("mean length matches");
        g.set_variance(variance.view()).expect("variance length matches");
        g
    }

    #[test]
    // Purpose
    // -------
    // `resize(n)` sizes every vector to `n` with the documented defaults.
    //
    // Given
    // -----
    // - A model previously configured with non-default values.
    //
    // Expect
    // ------
    // - mean == zeros, variance == ones, thresholds == default floor.
    // - g_norm == n · ln(2π) (since ln 1 = 0).
    fn resize_resets_vectors_to_defaults() {
        let mut g = configured(array![1.0, 2.0], array![3.0, 4.0]);

        for n in [0usize, 1, 5] {
            g.resize(n).unwrap();

            assert_eq!(g.n_inputs(), n);
            assert_eq!(g.mean().len(), n);
            assert_eq!(g.variance().len(), n);
            assert_eq!(g.variance_thresholds().len(), n);
            assert!(g.mean().iter().all(|&m| m == 0.0));
            assert!(g.variance().iter().all(|&v| v == 1.0));
            assert!(g.variance_thresholds().iter().all(|&t| t == f64::EPSILON));
            assert_relative_eq!(g.g_norm(), n as f64 * LOG_2PI, epsilon = TOL);
        }
    }

    #[test]
    fn default_model_is_unconfigured() {
        let g = DiagGaussian::default();
        assert_eq!(g.n_inputs(), 0);
        assert_eq!(g.g_norm(), 0.0);
        assert_eq!(g.log_likelihood(Array1::<f64>::zeros(0).view()).unwrap(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A negative signed dimensionality is rejected and the model is untouched.
    fn resize_signed_rejects_negative_dimensionality() {
        let mut g = configured(array![1.0], array![2.0]);
        let before = g.clone();

        let err = g.resize_signed(-3).unwrap_err();

        assert!(matches!(err, GaussianError::InvalidArgument { name: "n_inputs", .. }));
        assert_eq!(g, before);

        g.resize_signed(2).unwrap();
        assert_eq!(g.n_inputs(), 2);
    }

    #[test]
    fn set_n_inputs_behaves_like_resize() {
        let mut a = configured(array![1.0], array![2.0]);
        let mut b = a.clone();
        a.set_n_inputs(3).unwrap();
        b.resize(3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    // Purpose
    // -------
    // `set_mean` with the wrong length fails and keeps the previous mean.
    fn set_mean_mismatch_leaves_prior_mean_unchanged() {
        let mut g = DiagGaussian::new(2);
        g.set_mean(array![1.5, -2.5].view()).unwrap();

        let err = g.set_mean(array![9.0, 9.0, 9.0].view()).unwrap_err();

        assert_eq!(err, GaussianError::DimensionMismatch { what: "mean", expected: 2, actual: 3 });
        assert_eq!(g.mean().to_vec(), vec![1.5, -2.5]);
    }

    #[test]
    // Purpose
    // -------
    // Non-finite mean entries are rejected as invalid arguments and keep the
    // previous mean.
    fn set_mean_rejects_non_finite_entries() {
        let mut g = DiagGaussian::new(2);
        g.set_mean(array![1.5, -2.5].view()).unwrap();

        let err = g.set_mean(array![0.0, f64::INFINITY].view()).unwrap_err();
        assert_eq!(
            err,
            GaussianError::InvalidArgument {
                name: "mean",
                value: f64::INFINITY,
                reason: "mean entries must be finite",
            }
        );

        let err = g.set_mean(array![f64::NAN, 0.0].view()).unwrap_err();
        assert!(matches!(
            err,
            GaussianError::InvalidArgument { name: "mean", value, .. } if value.is_nan()
        ));
        assert_eq!(g.mean().to_vec(), vec![1.5, -2.5]);
    }

    #[test]
    // Purpose
    // -------
    // The mean does not enter the normalization term.
    fn set_mean_does_not_touch_g_norm() {
        let mut g = configured(array![0.0, 0.0], array![2.0, 5.0]);
        let before = g.g_norm();

        g.set_mean(array![10.0, -7.0].view()).unwrap();

        assert_eq!(g.g_norm(), before);
    }

    #[test]
    fn set_variance_and_thresholds_reject_wrong_lengths() {
        let mut g = configured(array![0.0, 0.0], array![2.0, 5.0]);
        let before = g.clone();

        assert!(matches!(
            g.set_variance(array![1.0].view()),
            Err(GaussianError::DimensionMismatch { what: "variance", expected: 2, actual: 1 })
        ));
        assert!(matches!(
            g.set_variance_thresholds(array![1.0, 1.0, 1.0].view()),
            Err(GaussianError::DimensionMismatch {
                what: "variance_thresholds",
                expected: 2,
                actual: 3
            })
        ));
        assert_eq!(g, before);
    }

    #[test]
    // Purpose
    // -------
    // Flooring happens on write: after thresholds `t`, `set_variance(v)`
    // stores `max(v, t)` elementwise.
    //
    // Given
    // -----
    // - Several (v, t) pairs mixing entries above, below and equal to the
    //   floor.
    fn set_variance_floors_against_thresholds() {
        let cases = [
            (array![0.5, 3.0, 1.0], array![1.0, 1.0, 1.0]),
            (array![1e-9, 1e-3, 7.0], array![1e-6, 1e-6, 8.0]),
            (array![2.0, 2.0, 2.0], array![0.0, 0.0, 0.0]),
        ];
        for (v, t) in cases {
            let mut g = DiagGaussian::new(3);
            g.set_variance_thresholds(t.view()).unwrap();
            g.set_variance(v.view()).unwrap();

            let expected: Vec<f64> = v.iter().zip(t.iter()).map(|(a, b)| a.max(*b)).collect();
            assert_eq!(g.variance().to_vec(), expected);
            assert_eq!(g.variance_thresholds().to_vec(), t.to_vec());
        }
    }

    #[test]
    // Purpose
    // -------
    // New thresholds re-floor the variance already stored and refresh g_norm.
    fn set_variance_thresholds_refloors_current_variance() {
        let mut g = configured(array![0.0, 0.0], array![0.25, 4.0]);

        g.set_variance_thresholds(array![1.0, 1.0].view()).unwrap();

        assert_eq!(g.variance().to_vec(), vec![1.0, 4.0]);
        assert_relative_eq!(g.g_norm(), 2.0 * LOG_2PI + 4f64.ln(), epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Walk through the factor form on a two-dimensional model.
    //
    // Given
    // -----
    // - dimensionality 2, mean [0, 0], variance [1, 1], default thresholds.
    //
    // Expect
    // ------
    // - `set_variance_thresholds_factor(2.0)` derives thresholds [2, 2] from
    //   the current variance [1, 1].
    // - A subsequent `set_variance([0.5, 3.0])` stores [2.0, 3.0].
    fn factor_thresholds_then_variance_walkthrough() {
        let mut g = configured(array![0.0, 0.0], array![1.0, 1.0]);

        g.set_variance_thresholds_factor(2.0).unwrap();
        assert_eq!(g.variance_thresholds().to_vec(), vec![2.0, 2.0]);
        assert_eq!(g.variance().to_vec(), vec![2.0, 2.0]);

        g.set_variance(array![0.5, 3.0].view()).unwrap();
        assert_eq!(g.variance().to_vec(), vec![2.0, 3.0]);
        assert_relative_eq!(g.g_norm(), 2.0 * LOG_2PI + 6f64.ln(), epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // A factor below one leaves the variance as stored.
    fn factor_below_one_keeps_variance() {
        let mut g = configured(array![0.0, 0.0], array![0.5, 8.0]);

        g.set_variance_thresholds_factor(0.01).unwrap();

        assert_eq!(g.variance().to_vec(), vec![0.5, 8.0]);
        assert_relative_eq!(g.variance_thresholds()[1], 0.08, epsilon = TOL);
    }

    #[test]
    fn factor_rejects_negative_and_non_finite_values() {
        let mut g = DiagGaussian::new(2);
        let before = g.clone();
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                g.set_variance_thresholds_factor(bad),
                Err(GaussianError::InvalidArgument { name: "factor", .. })
            ));
        }
        assert_eq!(g, before);
    }

    #[test]
    // Purpose
    // -------
    // Calling `set_variance(v)` twice gives the same state as calling it once.
    fn set_variance_is_idempotent() {
        let v = array![0.3, 1e-20, 12.0];
        let mut once = DiagGaussian::new(3);
        once.set_variance(v.view()).unwrap();

        let mut twice = once.clone();
        twice.set_variance(v.view()).unwrap();

        assert_eq!(twice.variance(), once.variance());
        assert_eq!(twice.g_norm(), once.g_norm());
        assert_eq!(once.variance()[1], f64::EPSILON);
    }

    #[test]
    // Purpose
    // -------
    // Invalid variance entries are rejected before any state changes.
    //
    // Given
    // -----
    // - A NaN entry (must not be silently replaced by the floor).
    // - A non-positive entry with zero thresholds (nothing to floor it up).
    fn set_variance_rejects_entries_that_cannot_be_floored() {
        let mut g = DiagGaussian::new(2);
        assert!(g.set_variance(array![f64::NAN, 1.0].view()).is_err());

        g.set_variance_thresholds(array![0.0, 0.0].view()).unwrap();
        let before = g.clone();
        assert!(matches!(
            g.set_variance(array![0.0, 1.0].view()),
            Err(GaussianError::InvalidArgument { name: "variance", .. })
        ));
        assert_eq!(g, before);
    }

    #[test]
    fn set_variance_thresholds_rejects_negative_entries() {
        let mut g = DiagGaussian::new(2);
        assert!(matches!(
            g.set_variance_thresholds(array![0.1, -0.1].view()),
            Err(GaussianError::InvalidArgument { name: "variance_thresholds", .. })
        ));
        assert!(g.variance_thresholds().iter().all(|&t| t == f64::EPSILON));
    }

    #[test]
    // Purpose
    // -------
    // Copy-out accessors write into matching buffers and reject others.
    fn getters_copy_out_and_check_lengths() {
        let mut g = configured(array![1.0, 2.0], array![3.0, 4.0]);
        g.set_variance_thresholds(array![0.5, 0.5].view()).unwrap();

        let mut out = Array1::zeros(2);
        g.get_mean(out.view_mut()).unwrap();
        assert_eq!(out.to_vec(), vec![1.0, 2.0]);
        g.get_variance(out.view_mut()).unwrap();
        assert_eq!(out.to_vec(), vec![3.0, 4.0]);
        g.get_variance_thresholds(out.view_mut()).unwrap();
        assert_eq!(out.to_vec(), vec![0.5, 0.5]);

        let mut short = Array1::zeros(1);
        assert!(matches!(
            g.get_mean(short.view_mut()),
            Err(GaussianError::DimensionMismatch { what: "mean", expected: 2, actual: 1 })
        ));
        assert!(g.get_variance(short.view_mut()).is_err());
        assert!(g.get_variance_thresholds(short.view_mut()).is_err());
        assert_eq!(short[0], 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Standard normal at its mean has log-density -½ ln(2π).
    fn standard_normal_at_mean() {
        let g = configured(array![0.0], array![1.0]);

        let ll = g.log_likelihood(array![0.0].view()).unwrap();

        assert_relative_eq!(ll, -0.5 * LOG_2PI, epsilon = TOL);
        assert_relative_eq!(ll, -0.918_938_533_204_672_7, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The diagonal model equals a product of independent univariate normals.
    //
    // Given
    // -----
    // - A three-dimensional model and a handful of samples.
    //
    // Expect
    // ------
    // - `log_likelihood` equals Σ_i Normal(μ_i, σ_i).ln_pdf(x_i) from statrs.
    fn log_likelihood_matches_product_of_univariate_normals() {
        let mean = array![0.5, -1.0, 3.0];
        let variance = array![0.25, 2.0, 9.0];
        let g = configured(mean.clone(), variance.clone());

        for x in [array![0.5, -1.0, 3.0], array![1.0, 0.0, -2.0], array![-4.0, 2.5, 10.0]] {
            let expected: f64 = (0..3)
                .map(|i| Normal::new(mean[i], variance[i].sqrt()).unwrap().ln_pdf(x[i]))
                .sum();

            let got = g.log_likelihood(x.view()).unwrap();

            assert_relative_eq!(got, expected, epsilon = 1e-10, max_relative = 1e-10);
        }
    }

    #[test]
    fn log_likelihood_rejects_wrong_sample_length() {
        let g = DiagGaussian::new(3);
        assert!(matches!(
            g.log_likelihood(array![0.0, 0.0].view()),
            Err(GaussianError::DimensionMismatch { what: "sample", expected: 3, actual: 2 })
        ));
        assert!(g.log_likelihood_f32(Array1::<f32>::zeros(4).view()).is_err());
    }

    #[test]
    // Purpose
    // -------
    // The f32 entry point widens samples and agrees with the f64 path.
    fn log_likelihood_f32_agrees_with_f64() {
        let g = configured(array![0.25, -0.5], array![0.5, 2.0]);
        let x32 = array![1.5f32, 0.75];
        let x64 = x32.mapv(f64::from);

        let a = g.log_likelihood_f32(x32.view()).unwrap();
        let b = g.log_likelihood(x64.view()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    // Purpose
    // -------
    // A tiny floored variance stays finite in both g_norm and evaluation.
    fn floored_variance_keeps_evaluation_finite() {
        let g = configured(array![0.0], array![0.0]);

        assert_eq!(g.variance()[0], f64::EPSILON);
        assert!(g.g_norm().is_finite());
        assert!(g.log_likelihood(array![1e-3].view()).unwrap().is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Clones share no state with the original.
    fn clone_is_independent() {
        let original = configured(array![1.0, 2.0], array![3.0, 4.0]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_mean(array![-1.0, -2.0].view()).unwrap();
        copy.set_variance(array![10.0, 10.0].view()).unwrap();
        copy.set_variance_thresholds_factor(2.0).unwrap();

        assert_eq!(original.mean().to_vec(), vec![1.0, 2.0]);
        assert_eq!(original.variance().to_vec(), vec![3.0, 4.0]);
        assert!(original.variance_thresholds().iter().all(|&t| t == f64::EPSILON));
        assert_relative_eq!(original.g_norm(), 2.0 * LOG_2PI + 12f64.ln(), epsilon = TOL);
    }

    #[test]
    fn custom_options_set_resize_floor() {
        let opts = GaussianOptions::new(0.1).unwrap();
        let mut g = DiagGaussian::with_options(2, opts);
        g.set_variance(array![0.01, 0.5].view()).unwrap();
        assert_eq!(g.variance().to_vec(), vec![0.1, 0.5]);

        g.resize(1).unwrap();
        assert_eq!(g.variance_thresholds().to_vec(), vec![0.1]);
        assert_eq!(g.options(), opts);
    }

    #[test]
    fn forward_delegates_to_log_likelihood() {
        let g = configured(array![1.0, -1.0], array![2.0, 0.5]);
        let x = array![0.0, 0.0];
        let machine: &dyn Machine = &g;

        assert_eq!(machine.n_inputs(), 2);
        assert_eq!(machine.forward(x.view()).unwrap(), g.log_likelihood(x.view()).unwrap());
    }

    #[cfg(feature = "obs_slog")]
    #[test]
    fn report_writes_current_state_without_mutating_it() {
        let g = configured(array![1.0, -1.0], array![2.0, 0.5]);
        let before = g.clone();

        g.report();

        assert_eq!(g, before);
    }

    #[test]
    fn display_lists_mean_and_variance() {
        let g = configured(array![1.0], array![2.0]);
        let text = g.to_string();
        assert!(text.starts_with("Mean: [1]"), "unexpected rendering: {text}");
        assert!(text.contains("Variance: [2]"), "unexpected rendering: {text}");
    }
}
