//! Ranking Aggregator
//!
//! Runs the full pipeline for every base and derived metric - z-scores over
//! the metric, regular and tuned DCA against the shared price series - and
//! ranks metrics by tuned profit. A metric with no usable data is skipped
//! with a diagnostic; it never fails the whole pass.

use tracing::{debug, warn};

use crate::domain::{MetricData, RankedMetric, WindowSize};
use crate::engine::{compute_z_scores, regular_dca, tuned_dca, EngineError, WeightingModel};
use crate::metrics::{compute_derived_metrics, METRICS};

/// Per-call pipeline settings. Passed by value into every evaluation so the
/// engine carries no ambient configuration state; re-running with different
/// settings is idempotent and side-effect free.
#[derive(Debug, Clone, Copy)]
pub struct RankSettings {
    /// Trailing window the DCA strategies invest over.
    pub dca_window: WindowSize,
    /// Rolling window for z-score normalization.
    pub zscore_window: WindowSize,
    /// Dollars invested per day by the regular strategy (and in total
    /// parity by the tuned one).
    pub budget_per_day: f64,
    /// Softmax temperature.
    pub temperature: f64,
    /// Weighting model for the tuned strategy.
    pub model: WeightingModel,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            dca_window: WindowSize::default(),
            zscore_window: WindowSize::default(),
            budget_per_day: 10.0,
            temperature: 1.0,
            model: WeightingModel::Softmax,
        }
    }
}

/// Merge base metrics (catalog order) and derived metrics (registry order)
/// into one ordered list. The order fixes leaderboard tie-breaking, so it
/// must stay deterministic; metrics absent from the fetched data are
/// dropped here, empty derived series are kept and skipped during ranking.
pub fn collect_all_metrics(data: &MetricData) -> Vec<(String, Vec<f64>)> {
    let mut all: Vec<(String, Vec<f64>)> = METRICS
        .iter()
        .filter_map(|&name| {
            data.series(name)
                .map(|series| (name.to_string(), series.to_vec()))
        })
        .collect();
    all.extend(compute_derived_metrics(&data.metrics));
    all
}

/// Evaluate and rank every metric against the shared price series.
///
/// `prices` is the full, untruncated price history; the current price for
/// USD conversion is always its last element, and the total investment uses
/// the effective window length `min(dca_window, prices.len())`.
///
/// Only a bad parameter (non-positive temperature) fails the pass; empty
/// metrics are skipped.
pub fn rank_metrics(
    all_metrics: &[(String, Vec<f64>)],
    prices: &[f64],
    settings: &RankSettings,
) -> Result<Vec<RankedMetric>, EngineError> {
    // Surface a bad temperature before touching any metric.
    if settings.temperature <= 0.0 || !settings.temperature.is_finite() {
        return Err(EngineError::InvalidTemperature(settings.temperature));
    }

    let Some(&current_price) = prices.last() else {
        warn!("empty price series, nothing to rank");
        return Ok(Vec::new());
    };

    let effective_len = settings.dca_window.effective_len(prices.len());
    let total_investment = settings.budget_per_day * effective_len as f64;

    // Regular DCA is metric-independent; compute it once.
    let regular = regular_dca(prices, settings.budget_per_day, settings.dca_window);
    let regular_btc: f64 = regular.iter().sum();
    let regular_profit_pct = profit_pct(regular_btc * current_price, total_investment);

    let mut results = Vec::with_capacity(all_metrics.len());
    for (metric, series) in all_metrics {
        if series.is_empty() {
            debug!(%metric, "skipping metric with no data");
            continue;
        }

        let z = compute_z_scores(series, settings.zscore_window);
        let tuned = tuned_dca(
            prices,
            &z,
            settings.budget_per_day,
            settings.dca_window,
            settings.model,
            settings.temperature,
        )?;
        let tuned_btc: f64 = tuned.iter().sum();

        let tuned_profit_pct = profit_pct(tuned_btc * current_price, total_investment);
        let btc_outperformance_pct = if regular_btc > 0.0 {
            (((tuned_btc - regular_btc) / regular_btc) * 100.0).round() as i64
        } else {
            0
        };

        results.push(RankedMetric {
            metric: metric.clone(),
            model: settings.model.name(),
            profit_pct: tuned_profit_pct,
            btc_bought: tuned_btc,
            regular_profit_pct,
            regular_btc_bought: regular_btc,
            outperformance_pct: tuned_profit_pct - regular_profit_pct,
            btc_outperformance_pct,
        });
    }

    // Stable sort keeps input order for equal profits.
    results.sort_by(|a, b| b.profit_pct.cmp(&a.profit_pct));
    Ok(results)
}

/// Rounded whole-percent profit, 0 when nothing was invested.
fn profit_pct(value_usd: f64, total_investment: f64) -> i64 {
    if total_investment > 0.0 {
        (((value_usd - total_investment) / total_investment) * 100.0).round() as i64
    } else {
        0
    }
}
