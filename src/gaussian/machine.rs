//! Machine — capability interface for probability models scored on one
//! feature vector at a time.
//!
//! Scoring layers (mixtures, decision stages) hold models through this trait
//! so that a diagonal Gaussian can be swapped for another density without
//! changing the caller.
use crate::gaussian::errors::GaussianResult;
use ndarray::ArrayView1;

/// A model that maps a fixed-length feature vector to a log-likelihood.
///
/// Required:
/// - `n_inputs() -> usize`: expected length of every sample.
/// - `forward(sample) -> GaussianResult<f64>`: log-likelihood of `sample`.
///   Implementations must return `GaussianError::DimensionMismatch` rather
///   than read out of bounds when `sample.len() != n_inputs()`.
pub trait Machine {
    fn n_inputs(&self) -> usize;
    fn forward(&self, sample: ArrayView1<f64>) -> GaussianResult<f64>;
}
