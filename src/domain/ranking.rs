//! Leaderboard Rows
//!
//! One `RankedMetric` per evaluated metric/model pair, carrying both the
//! tuned and regular DCA outcomes plus the outperformance deltas the
//! leaderboard displays. Profit percentages are rounded to whole percent.

use serde::Serialize;

/// Outcome of running the tuned-vs-regular DCA comparison for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMetric {
    /// Metric identifier (base catalog id or derived metric name).
    pub metric: String,
    /// Weighting model that produced the tuned allocation.
    pub model: &'static str,
    /// Tuned strategy profit over the window, in whole percent.
    pub profit_pct: i64,
    /// Total BTC bought by the tuned strategy.
    pub btc_bought: f64,
    /// Regular DCA profit over the same window, in whole percent.
    pub regular_profit_pct: i64,
    /// Total BTC bought by regular DCA.
    pub regular_btc_bought: f64,
    /// `profit_pct - regular_profit_pct`.
    pub outperformance_pct: i64,
    /// BTC-quantity outperformance in whole percent, 0 when regular bought none.
    pub btc_outperformance_pct: i64,
}
