//! Date-Aligned Metric Collections
//!
//! Every computation in the engine runs over series that share one date
//! axis. `MetricData` bundles the axis with the fetched base series and
//! enforces the alignment invariant at construction time: a series whose
//! length differs from the date axis is a hard error, never padded.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

/// A metric series is misaligned with the shared date axis.
#[derive(Debug, Clone, Error)]
#[error("metric '{metric}' has {len} points, expected {expected} (date axis length)")]
pub struct AlignmentError {
    pub metric: String,
    pub len: usize,
    pub expected: usize,
}

/// Base metric series indexed by a common daily date axis.
///
/// Values use `f64::NAN` for days the source had no observation; the engine
/// treats NaN as "invalid sample", not as zero.
#[derive(Debug, Clone, Default)]
pub struct MetricData {
    pub dates: Vec<NaiveDate>,
    pub metrics: HashMap<String, Vec<f64>>,
}

impl MetricData {
    /// Build a collection, verifying every series matches the date axis.
    pub fn new(
        dates: Vec<NaiveDate>,
        metrics: HashMap<String, Vec<f64>>,
    ) -> Result<Self, AlignmentError> {
        let expected = dates.len();
        for (metric, series) in &metrics {
            if series.len() != expected {
                return Err(AlignmentError {
                    metric: metric.clone(),
                    len: series.len(),
                    expected,
                });
            }
        }
        Ok(Self { dates, metrics })
    }

    /// Series for one metric, if present.
    pub fn series(&self, metric: &str) -> Option<&[f64]> {
        self.metrics.get(metric).map(Vec::as_slice)
    }

    /// Number of days on the shared axis.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n).map(|i| start + chrono::Days::new(i as u64)).collect()
    }

    #[test]
    fn test_aligned_series_accepted() {
        let mut metrics = HashMap::new();
        metrics.insert("close".to_string(), vec![1.0, 2.0, 3.0]);
        metrics.insert("marketcap".to_string(), vec![10.0, 20.0, 30.0]);

        let data = MetricData::new(dates(3), metrics).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.series("close"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(data.series("missing"), None);
    }

    #[test]
    fn test_misaligned_series_rejected() {
        let mut metrics = HashMap::new();
        metrics.insert("close".to_string(), vec![1.0, 2.0]);

        let err = MetricData::new(dates(3), metrics).unwrap_err();
        assert_eq!(err.metric, "close");
        assert_eq!(err.len, 2);
        assert_eq!(err.expected, 3);
    }

    #[test]
    fn test_empty_collection() {
        let data = MetricData::new(Vec::new(), HashMap::new()).unwrap();
        assert!(data.is_empty());
    }
}
