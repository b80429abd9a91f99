//! gaussian — diagonal Gaussian density model: state, options, and errors.
//!
//! Purpose
//! -------
//! Provide a multivariate Gaussian with diagonal covariance that can be
//! configured once (dimensionality, mean, variance, variance floors) and then
//! scored repeatedly on single feature vectors, returning log-likelihoods
//! that downstream scoring layers combine in log space.
//!
//! Key behaviors
//! -------------
//! - Expose the model as [`DiagGaussian`] with validated mutators
//!   (`resize`, `set_mean`, `set_variance`, `set_variance_thresholds`,
//!   `set_variance_thresholds_factor`), copy-out accessors, and
//!   `log_likelihood`.
//! - Floor variances on write against per-dimension thresholds and keep the
//!   cached normalization constant in sync after every mutation.
//! - Define the [`Machine`] capability trait so callers can hold any
//!   per-sample log-likelihood model behind one interface.
//! - Centralize model errors in [`errors`] (`GaussianError`,
//!   `GaussianResult`) and construction-time configuration in [`options`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Mean, variance and threshold vectors always have length `n_inputs`.
//! - Stored variances are finite, strictly positive, and no smaller than
//!   their thresholds.
//! - A failed mutator leaves the model unchanged.
//! - Models are single-owner values without internal synchronization.
//!
//! Conventions
//! -----------
//! - `n_inputs == 0` is the "unconfigured" state; evaluating an empty sample
//!   on it yields log-likelihood `0`.
//! - Natural logarithms throughout; `ln(2π)` comes from
//!   [`crate::numerics::LOG_2PI`].
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. `DiagGaussian::new(n)` (or `with_options` for a custom floor).
//!   2. `set_mean`, optionally `set_variance_thresholds*`, then
//!      `set_variance`.
//!   3. Call `log_likelihood` (or `Machine::forward`) per feature vector.
//! - Python bindings wrap this module and rely on the `GaussianError → PyErr`
//!   conversion in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; the integration test in
//!   `tests/` exercises the public surface together with `numerics`.

pub mod errors;
pub mod machine;
pub mod model;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{GaussianError, GaussianResult};
pub use self::machine::Machine;
pub use self::model::DiagGaussian;
pub use self::options::{DEFAULT_VARIANCE_THRESHOLD, GaussianOptions};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_gaussian::gaussian::prelude::*;
//
// to import the model surface in a single line.

pub mod prelude {
    pub use super::{DiagGaussian, GaussianError, GaussianOptions, GaussianResult, Machine};
}
