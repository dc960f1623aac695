//! Derived Metric Registry
//!
//! Composite metrics computed as pure formulas over the base metric map.
//! The registry is a closed enum: adding a metric means adding a variant
//! and the compiler walks every match that needs updating.
//!
//! A formula whose inputs are missing or misaligned yields an empty series
//! for its own name only; callers treat empty as "metric unavailable" and
//! skip it. One broken formula never blocks the others.

use std::collections::HashMap;

/// The closed set of derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedMetric {
    /// Market cap / realized cap.
    MvrvRatio,
    /// Close price / 200-day SMA.
    MayerMultiple,
}

impl DerivedMetric {
    /// Every registered derived metric, in leaderboard iteration order.
    pub const ALL: [DerivedMetric; 2] = [DerivedMetric::MvrvRatio, DerivedMetric::MayerMultiple];

    /// Display name, also used as the metric's key in result maps.
    pub fn name(self) -> &'static str {
        match self {
            DerivedMetric::MvrvRatio => "MVRV Ratio",
            DerivedMetric::MayerMultiple => "Mayer Multiple",
        }
    }

    /// Evaluate the formula over the base metric map. Returns an empty
    /// series when an input is missing or input lengths differ.
    pub fn compute(self, metrics: &HashMap<String, Vec<f64>>) -> Vec<f64> {
        match self {
            DerivedMetric::MvrvRatio => ratio_of(metrics, "marketcap", "realized-cap"),
            DerivedMetric::MayerMultiple => ratio_of(metrics, "close", "200d-sma"),
        }
    }
}

/// Compute all derived metrics. Every registered name gets an entry; failed
/// formulas contribute an empty series.
pub fn compute_derived_metrics(metrics: &HashMap<String, Vec<f64>>) -> Vec<(String, Vec<f64>)> {
    DerivedMetric::ALL
        .iter()
        .map(|m| (m.name().to_string(), m.compute(metrics)))
        .collect()
}

/// Element-wise `numerator / denominator` with per-element guards: a
/// non-finite operand or zero denominator yields NaN at that index without
/// aborting the series.
fn ratio_of(metrics: &HashMap<String, Vec<f64>>, numerator: &str, denominator: &str) -> Vec<f64> {
    let (Some(num), Some(den)) = (metrics.get(numerator), metrics.get(denominator)) else {
        return Vec::new();
    };
    if num.len() != den.len() {
        return Vec::new();
    }
    num.iter()
        .zip(den)
        .map(|(&n, &d)| {
            if n.is_finite() && d.is_finite() && d != 0.0 {
                n / d
            } else {
                f64::NAN
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(entries: &[(&str, &[f64])]) -> HashMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(name, series)| (name.to_string(), series.to_vec()))
            .collect()
    }

    #[test]
    fn test_mvrv_ratio_with_zero_denominator() {
        let metrics = base(&[
            ("marketcap", &[200.0, 210.0]),
            ("realized-cap", &[100.0, 0.0]),
        ]);
        let mvrv = DerivedMetric::MvrvRatio.compute(&metrics);
        assert_eq!(mvrv[0], 2.0);
        assert!(mvrv[1].is_nan());
    }

    #[test]
    fn test_mayer_multiple() {
        let metrics = base(&[("close", &[300.0, 100.0]), ("200d-sma", &[150.0, 100.0])]);
        let mayer = DerivedMetric::MayerMultiple.compute(&metrics);
        assert_eq!(mayer, vec![2.0, 1.0]);
    }

    #[test]
    fn test_missing_input_yields_empty() {
        let metrics = base(&[("marketcap", &[200.0])]);
        assert!(DerivedMetric::MvrvRatio.compute(&metrics).is_empty());
    }

    #[test]
    fn test_misaligned_inputs_yield_empty() {
        let metrics = base(&[
            ("marketcap", &[200.0, 210.0]),
            ("realized-cap", &[100.0]),
        ]);
        assert!(DerivedMetric::MvrvRatio.compute(&metrics).is_empty());
    }

    #[test]
    fn test_nan_operand_guards_single_element() {
        let metrics = base(&[
            ("marketcap", &[f64::NAN, 210.0]),
            ("realized-cap", &[100.0, 105.0]),
        ]);
        let mvrv = DerivedMetric::MvrvRatio.compute(&metrics);
        assert!(mvrv[0].is_nan());
        assert_eq!(mvrv[1], 2.0);
    }

    #[test]
    fn test_broken_formula_is_isolated() {
        // No 200d-sma: Mayer Multiple fails, MVRV still computes.
        let metrics = base(&[
            ("marketcap", &[200.0]),
            ("realized-cap", &[100.0]),
            ("close", &[300.0]),
        ]);
        let derived = compute_derived_metrics(&metrics);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].0, "MVRV Ratio");
        assert_eq!(derived[0].1, vec![2.0]);
        assert_eq!(derived[1].0, "Mayer Multiple");
        assert!(derived[1].1.is_empty());
    }
}
