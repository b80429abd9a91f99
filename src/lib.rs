//! rust_gaussian — diagonal Gaussian densities and log-domain arithmetic with
//! optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Gaussian model and log-space helpers to Python via the
//! `_rust_gaussian` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes, functions and
//! submodules used by the `rust_gaussian` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`gaussian` and `numerics`) as the
//!   public crate surface.
//! - Define the `DiagGaussian` `#[pyclass]` wrapper, the `log_add` /
//!   `log_sub` `#[pyfunction]`s, and the `#[pymodule]` initializer.
//! - Register the Python submodules (`models`, `numerics`) under
//!   `rust_gaussian` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts;
//!   every failure surfaces as a Python `ValueError`/`TypeError`.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code (`GaussianError`, `LogError`) are converted
//!   to `PyErr` at the PyO3 boundary.
//! - Vectors cross the boundary as 1-D `float64` arrays or sequences and are
//!   returned as Python lists.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`gaussian`] and
//!   [`numerics`] and can ignore the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration tests in `tests/`.

pub mod gaussian;
pub mod numerics;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    gaussian::{DiagGaussian, GaussianOptions},
    utils::extract_f64_vector,
};

/// DiagGaussian — Python-facing wrapper for [`gaussian::DiagGaussian`].
///
/// Parameters
/// ----------
/// Constructed from Python via `DiagGaussian(n_inputs=0, default_threshold=None)`:
/// - `n_inputs`: `i64`
///   Feature dimensionality; must be `>= 0`.
/// - `default_threshold`: `Option<f64>`
///   Variance floor installed by `resize`; defaults to machine epsilon.
///
/// Notes
/// -----
/// - Native Rust code should use [`gaussian::DiagGaussian`] directly; this
///   type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "DiagGaussian", module = "rust_gaussian.models")]
pub struct PyDiagGaussian {
    inner: DiagGaussian,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyDiagGaussian {
    #[new]
    #[pyo3(
        signature = (n_inputs = 0, default_threshold = None),
        text_signature = "(n_inputs=0, /, default_threshold=None)"
    )]
    pub fn new(n_inputs: i64, default_threshold: Option<f64>) -> PyResult<Self> {
        let options = match default_threshold {
            Some(t) => GaussianOptions::new(t)?,
            None => GaussianOptions::default(),
        };
        let mut inner = DiagGaussian::with_options(0, options);
        inner.resize_signed(n_inputs)?;
        Ok(PyDiagGaussian { inner })
    }

    /// Set the dimensionality; resets mean, variance and thresholds.
    pub fn resize(&mut self, n_inputs: i64) -> PyResult<()> {
        Ok(self.inner.resize_signed(n_inputs)?)
    }

    pub fn set_mean<'py>(&mut self, py: Python<'py>, mean: &Bound<'py, PyAny>) -> PyResult<()> {
        let mean = extract_f64_vector(py, mean, "mean")?;
        Ok(self.inner.set_mean(mean.view())?)
    }

    pub fn set_variance<'py>(
        &mut self, py: Python<'py>, variance: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let variance = extract_f64_vector(py, variance, "variance")?;
        Ok(self.inner.set_variance(variance.view())?)
    }

    /// Set variance floors from either a float factor (applied to the current
    /// variance) or a per-dimension vector.
    pub fn set_variance_thresholds<'py>(
        &mut self, py: Python<'py>, thresholds: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        if let Ok(factor) = thresholds.extract::<f64>() {
            return Ok(self.inner.set_variance_thresholds_factor(factor)?);
        }
        let thresholds = extract_f64_vector(py, thresholds, "variance_thresholds")?;
        Ok(self.inner.set_variance_thresholds(thresholds.view())?)
    }

    /// Log-likelihood of one feature vector.
    pub fn log_likelihood<'py>(&self, py: Python<'py>, sample: &Bound<'py, PyAny>) -> PyResult<f64> {
        let sample = extract_f64_vector(py, sample, "sample")?;
        Ok(self.inner.log_likelihood(sample.view())?)
    }

    #[getter]
    pub fn n_inputs(&self) -> usize {
        self.inner.n_inputs()
    }

    #[getter]
    pub fn mean(&self) -> Vec<f64> {
        self.inner.mean().to_vec()
    }

    #[getter]
    pub fn variance(&self) -> Vec<f64> {
        self.inner.variance().to_vec()
    }

    #[getter]
    pub fn variance_thresholds(&self) -> Vec<f64> {
        self.inner.variance_thresholds().to_vec()
    }

    #[getter]
    pub fn g_norm(&self) -> f64 {
        self.inner.g_norm()
    }

    pub fn __repr__(&self) -> String {
        format!("DiagGaussian(n_inputs={})\n{}", self.inner.n_inputs(), self.inner)
    }
}

/// `ln(exp(log_a) + exp(log_b))` without leaving log space.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "log_add")]
fn py_log_add(log_a: f64, log_b: f64) -> f64 {
    numerics::log_add(log_a, log_b)
}

/// `ln(exp(log_a) - exp(log_b))`; raises `ValueError` when `log_a < log_b`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "log_sub")]
fn py_log_sub(log_a: f64, log_b: f64) -> PyResult<f64> {
    Ok(numerics::log_sub(log_a, log_b)?)
}

/// _rust_gaussian — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `models` and `numerics` submodules and attach them to the
///   parent `_rust_gaussian` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr` if creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_gaussian<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    let numerics_mod = PyModule::new(_py, "numerics")?;
    models(_py, m, &models_mod)?;
    numerics_functions(_py, m, &numerics_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let sys_modules = _py.import("sys")?.getattr("modules")?;
    sys_modules.set_item("rust_gaussian.models", models_mod)?;
    sys_modules.set_item("rust_gaussian.numerics", numerics_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, rust_gaussian: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyDiagGaussian>()?;
    rust_gaussian.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn numerics_functions<'py>(
    _py: Python, rust_gaussian: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_log_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_log_sub, m)?)?;
    m.add("LOG_2PI", numerics::LOG_2PI)?;
    m.add("LOG_ZERO", numerics::LOG_ZERO)?;
    m.add("LOG_ONE", numerics::LOG_ONE)?;
    rust_gaussian.add_submodule(m)?;
    Ok(())
}
