//! Quantitative Engine
//!
//! The pure numeric core: rolling z-score normalization, the softmax
//! allocation model, and the two DCA strategies. Every function here is a
//! pure function of its inputs; degenerate numeric cases (zero variance,
//! zero price, zero weight sum) produce well-defined sentinel outputs
//! (`0` or `NaN`) instead of `Infinity` or panics.

pub mod dca;
pub mod softmax;
pub mod zscore;

use thiserror::Error;

pub use dca::{regular_dca, tuned_dca};
pub use softmax::{softmax, WeightingModel};
pub use zscore::compute_z_scores;

/// Engine parameter errors. Surfaced immediately to the caller, never
/// retried; data-quality problems (NaN samples, short windows) are handled
/// with sentinel values instead.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("softmax temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),
}
