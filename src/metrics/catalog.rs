//! Base Metric Catalog
//!
//! Stable identifiers for every on-chain/price series the tuner evaluates,
//! as exposed by the Bitcoin Research Kit date index. `close` doubles as
//! the shared price series for the DCA comparison.

/// Metric id of the daily close price.
pub const PRICE_METRIC: &str = "close";

/// All base metrics, in leaderboard iteration order.
pub const METRICS: [&str; 20] = [
    "close",
    "realized-price",
    "200d-sma",
    "true-market-mean",
    "vaulted-price",
    "marketcap",
    "realized-cap",
    "adjusted-spent-output-profit-ratio",
    "sell-side-risk-ratio",
    "liveliness",
    "short-term-holders-supply",
    "short-term-holders-utxo-count",
    "short-term-holders-realized-cap",
    "short-term-holders-realized-price-ratio",
    "short-term-holders-realized-profit",
    "short-term-holders-negative-realized-loss",
    "short-term-holders-adjusted-spent-output-profit-ratio",
    "short-term-holders-unrealized-profit",
    "short-term-holders-negative-unrealized-loss",
    "short-term-holders-coinblocks-destroyed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_metric_is_in_catalog() {
        assert!(METRICS.contains(&PRICE_METRIC));
    }

    #[test]
    fn test_no_duplicate_ids() {
        let mut ids: Vec<&str> = METRICS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), METRICS.len());
    }
}
