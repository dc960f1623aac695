//! DCA Allocation Strategies
//!
//! Two allocators over the same trailing price window:
//!
//! - regular DCA spends `budget_per_day` every day;
//! - tuned DCA redistributes the identical total budget
//!   (`budget_per_day * window_len`) across days proportionally to model
//!   weights derived from the metric's z-scores.
//!
//! Invariant shared by both: with all-positive prices, total dollars spent
//! equals `budget_per_day * window_len`, so the comparison is a pure
//! reallocation, never a budget change. Days with `price <= 0` buy nothing.

use crate::domain::WindowSize;

use super::{EngineError, WeightingModel};

/// BTC bought per day by uniform dollar-cost averaging over the trailing
/// window. Output length equals the effective window length.
pub fn regular_dca(prices: &[f64], budget_per_day: f64, window: WindowSize) -> Vec<f64> {
    trailing_window(prices, window)
        .iter()
        .map(|&price| if price > 0.0 { budget_per_day / price } else { 0.0 })
        .collect()
}

/// BTC bought per day when the window's total budget is reallocated by
/// `model` weights over the metric's z-scores.
///
/// `prices` and `z_scores` must already be date-aligned; both are cut to
/// the same trailing window. A weight vector that comes back with a
/// different length than the price window (a z-score source with gaps) is
/// realigned instead of rejected: overlapping prefix kept, renormalized to
/// sum 1, exact-uniform fallback when nothing overlaps.
pub fn tuned_dca(
    prices: &[f64],
    z_scores: &[f64],
    budget_per_day: f64,
    window: WindowSize,
    model: WeightingModel,
    temperature: f64,
) -> Result<Vec<f64>, EngineError> {
    let price_window = trailing_window(prices, window);
    let z_window = trailing_window(z_scores, window);

    let mut weights = model.weights(z_window, temperature)?;
    if weights.len() != price_window.len() {
        weights = realign_weights(&weights, price_window.len());
    }

    let total_budget = budget_per_day * price_window.len() as f64;
    Ok(price_window
        .iter()
        .zip(&weights)
        .map(|(&price, &weight)| {
            if price > 0.0 {
                weight * total_budget / price
            } else {
                0.0
            }
        })
        .collect())
}

/// Last `window` entries of `series`, or all of it when the window is
/// unbounded or longer than the series.
fn trailing_window(series: &[f64], window: WindowSize) -> &[f64] {
    let len = window.effective_len(series.len());
    &series[series.len() - len..]
}

/// Fit a weight vector to `len` slots: copy the overlapping prefix, zero
/// the rest, renormalize the copied mass to 1. Falls back to exact-uniform
/// `1/len` when the copied sum is zero.
fn realign_weights(weights: &[f64], len: usize) -> Vec<f64> {
    let mut out = vec![0.0; len];
    let overlap = weights.len().min(len);
    out[..overlap].copy_from_slice(&weights[..overlap]);

    let sum: f64 = out.iter().sum();
    if sum > 0.0 {
        for w in &mut out {
            *w /= sum;
        }
    } else if len > 0 {
        let uniform = 1.0 / len as f64;
        for w in &mut out {
            *w = uniform;
        }
    }
    out
}
