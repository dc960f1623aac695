//! Rolling Z-Score Normalization
//!
//! Standardizes a metric series against its own trailing history:
//! z[i] = (value[i] - rolling_mean) / rolling_population_std.
//!
//! The window at index `i` covers `series[start..=i]` where `start` is
//! `i - window + 1` clamped to the series start, so a window longer than
//! the elapsed history degrades to all history to date.

use crate::domain::WindowSize;

/// Compute rolling z-scores for `series`. The output always has the same
/// length as the input.
///
/// Per-index rules:
/// - window samples are filtered to finite values before statistics;
/// - fewer than 2 valid samples, or a non-finite `series[i]`, yield NaN;
/// - zero standard deviation yields 0, never a division artifact.
pub fn compute_z_scores(series: &[f64], window: WindowSize) -> Vec<f64> {
    let mut z_scores = Vec::with_capacity(series.len());

    for i in 0..series.len() {
        let start = window.start_index(i);
        let valid: Vec<f64> = series[start..=i]
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        if valid.len() < 2 || !series[i].is_finite() {
            z_scores.push(f64::NAN);
            continue;
        }

        let n = valid.len() as f64;
        let mean = valid.iter().sum::<f64>() / n;
        // Population standard deviation: divide by count, not count - 1.
        let variance = valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        if std_dev == 0.0 {
            z_scores.push(0.0);
        } else {
            z_scores.push((series[i] - mean) / std_dev);
        }
    }

    z_scores
}
