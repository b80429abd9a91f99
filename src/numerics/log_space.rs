//! Log-domain arithmetic on probabilities.
//!
//! Provides stable addition and subtraction of two values that are already
//! expressed as natural logarithms, so that probabilities can be combined
//! without returning to linear space (where products of many small densities
//! underflow to zero).
//!
//! # Provided items
//! - [`LOG_2PI`]: `ln(2π)`, the per-dimension Gaussian normalization term.
//! - [`LOG_ZERO`]: `-f64::MAX`, the finite stand-in for `ln(0)`.
//! - [`LOG_ONE`]: `0.0`, i.e. `ln(1)`.
//! - [`MINUS_LOG_THRESHOLD`]: cut-off below which `exp(·)` of an operand
//!   difference is treated as negligible (`exp(-39.14) ≈ 1e-17 < f64::EPSILON`).
//! - [`log_add`]: `ln(e^a + e^b)`.
//! - [`log_sub`]: `ln(e^a - e^b)` for `a >= b`.
//! - [`log_add_all`]: `log_add` folded over a sequence.
//!
//! # Numerics
//! Both operations factor out the larger operand and only exponentiate the
//! non-positive difference `lo - hi`, so `exp` never overflows. The result
//! is then `hi + ln_1p(±exp(lo - hi))`, which keeps full precision when the
//! correction term is tiny.
use crate::numerics::errors::{LogError, LogResult};

/// Natural logarithm of `2π`.
pub const LOG_2PI: f64 = 1.837_877_066_409_345_5;

/// Representation of `ln(0)`: the most negative finite `f64`.
///
/// A finite sentinel is used instead of `f64::NEG_INFINITY` so that sums of
/// log-probabilities never produce `NaN` through `-∞ + ∞` style expressions.
pub const LOG_ZERO: f64 = -f64::MAX;

/// Representation of `ln(1)`.
pub const LOG_ONE: f64 = 0.0;

/// Operand differences below this value contribute nothing at `f64`
/// precision: `exp(-39.14) < f64::EPSILON / 2`.
pub const MINUS_LOG_THRESHOLD: f64 = -39.14;

/// Stable log-domain addition: returns `ln(exp(log_a) + exp(log_b))`.
///
/// Parameters
/// ----------
/// - `log_a`, `log_b`: `f64`
///   Log-probabilities. Either may be [`LOG_ZERO`] (or `-∞`).
///
/// Returns
/// -------
/// `f64`
///   - The log of the summed probabilities.
///   - The other operand when one side is [`LOG_ZERO`].
///   - [`LOG_ZERO`] (or `-∞`) when both sides are.
///
/// Notes
/// -----
/// - The result is symmetric in its arguments: operands are ordered before
///   any arithmetic is performed.
/// - `NaN` inputs propagate to a `NaN` output.
pub fn log_add(log_a: f64, log_b: f64) -> f64 {
    let (hi, lo) = if log_a < log_b { (log_b, log_a) } else { (log_a, log_b) };
    if hi <= LOG_ZERO {
        return hi;
    }
    let minus_dif = lo - hi;
    if minus_dif < MINUS_LOG_THRESHOLD { hi } else { hi + minus_dif.exp().ln_1p() }
}

/// Stable log-domain subtraction: returns `ln(exp(log_a) - exp(log_b))`.
///
/// Parameters
/// ----------
/// - `log_a`: `f64`
///   Log-probability of the minuend; must satisfy `log_a >= log_b`.
/// - `log_b`: `f64`
///   Log-probability of the subtrahend. May be [`LOG_ZERO`].
///
/// Returns
/// -------
/// `LogResult<f64>`
///   - `Ok(log_a)` when `exp(log_b)` is negligible next to `exp(log_a)`
///     (this includes `log_b == LOG_ZERO`).
///   - `Ok(LOG_ZERO)` when the operands are equal, or when they are so close
///     that `ln(1 - exp(log_b - log_a))` falls below
///     [`MINUS_LOG_THRESHOLD`].
///   - `Ok(log_a + ln(1 - exp(log_b - log_a)))` otherwise.
///   - `NaN` inputs propagate to a `NaN` output, as in [`log_add`].
///
/// Errors
/// ------
/// - `LogError::DomainError`
///   Returned when `log_a < log_b`; the difference of probabilities would be
///   negative and has no logarithm.
pub fn log_sub(log_a: f64, log_b: f64) -> LogResult<f64> {
    if log_a < log_b {
        return Err(LogError::DomainError { log_a, log_b });
    }
    if log_a == log_b {
        return Ok(LOG_ZERO);
    }
    let minus_dif = log_b - log_a;
    if minus_dif < MINUS_LOG_THRESHOLD {
        return Ok(log_a);
    }
    let log_w = (-minus_dif.exp()).ln_1p();
    if log_w < MINUS_LOG_THRESHOLD {
        return Ok(LOG_ZERO);
    }
    Ok(log_a + log_w)
}

/// Log of the sum of `exp(v)` over `values`, accumulated with [`log_add`].
///
/// An empty sequence sums to probability zero and yields [`LOG_ZERO`].
pub fn log_add_all<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(LOG_ZERO, log_add)
}
