//! numerics — log-domain arithmetic shared by probability models.
//!
//! Purpose
//! -------
//! Collect the small set of stateless numeric primitives that probability
//! models need to stay in log space: stable addition and subtraction of
//! log-probabilities plus the constants used to represent `ln(0)`, `ln(1)`
//! and the Gaussian `ln(2π)` term.
//!
//! Key behaviors
//! -------------
//! - [`log_add`] combines two log-probabilities without overflow by only
//!   exponentiating the non-positive difference of the operands.
//! - [`log_sub`] does the same for differences and reports
//!   [`LogError::DomainError`] when the result would be the log of a
//!   negative number.
//! - [`log_add_all`] folds [`log_add`] over any iterator of log-values.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`LOG_ZERO`] is a finite sentinel (`-f64::MAX`); all routines treat it
//!   (and `-∞`) as probability zero.
//! - Underflow is never an error: a result that is too small to represent is
//!   returned as [`LOG_ZERO`].
//!
//! Conventions
//! -----------
//! - Natural logarithms throughout.
//! - This module never logs, performs I/O, or touches global state.
//!
//! Downstream usage
//! ----------------
//! - `gaussian::model` uses [`LOG_2PI`] for its cached normalization term.
//! - Scoring layers combine per-model log-likelihoods with [`log_add`] /
//!   [`log_add_all`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`log_space`] compare against naïve formulas on safe grids
//!   and pin down the sentinel and underflow behavior.

pub mod errors;
pub mod log_space;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{LogError, LogResult};
pub use self::log_space::{
    LOG_2PI, LOG_ONE, LOG_ZERO, MINUS_LOG_THRESHOLD, log_add, log_add_all, log_sub,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_gaussian::numerics::prelude::*;
//
// to import the log-domain surface in a single line.

pub mod prelude {
    pub use super::errors::{LogError, LogResult};
    pub use super::log_space::{LOG_2PI, LOG_ONE, LOG_ZERO, log_add, log_add_all, log_sub};
}
