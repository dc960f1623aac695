//! Softmax Allocation Model
//!
//! Turns a window of z-scores into a probability-like weight vector:
//! w[i] = exp(z[i] / t) / sum(exp(z[j] / t)). Lower temperatures
//! concentrate the budget on the highest-z days; large temperatures
//! flatten toward uniform allocation.

use super::EngineError;

/// The closed set of weighting models the tuner can run. Modeled as an enum
/// rather than function references so a new model cannot be added without
/// the match arms below (and the leaderboard labels) being updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingModel {
    Softmax,
}

impl WeightingModel {
    /// Display label used on the leaderboard.
    pub fn name(self) -> &'static str {
        match self {
            WeightingModel::Softmax => "Softmax",
        }
    }

    /// Allocation weights for a window of z-scores.
    pub fn weights(self, z_scores: &[f64], temperature: f64) -> Result<Vec<f64>, EngineError> {
        match self {
            WeightingModel::Softmax => softmax(z_scores, temperature),
        }
    }
}

/// Temperature-scaled softmax over a z-score window.
///
/// - `temperature <= 0` (or non-finite) is an `InvalidTemperature` error.
/// - Empty input yields empty output.
/// - Non-finite entries are treated as score 0; the slot keeps its weight.
/// - Numerically stable: the maximum scaled score is subtracted before
///   exponentiating.
/// - A zero exponential sum yields all-zero weights, never NaN.
pub fn softmax(z_scores: &[f64], temperature: f64) -> Result<Vec<f64>, EngineError> {
    if temperature <= 0.0 || !temperature.is_finite() {
        return Err(EngineError::InvalidTemperature(temperature));
    }
    if z_scores.is_empty() {
        return Ok(Vec::new());
    }

    let scaled: Vec<f64> = z_scores
        .iter()
        .map(|z| if z.is_finite() { z / temperature } else { 0.0 })
        .collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp_scores: Vec<f64> = scaled.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exp_scores.iter().sum();

    if sum == 0.0 {
        return Ok(vec![0.0; z_scores.len()]);
    }
    Ok(exp_scores.iter().map(|e| e / sum).collect())
}
