//! In-Memory Metric Source
//!
//! Port implementation backed by a prebuilt `MetricData`, used by tests and
//! offline experiments in place of the HTTP adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::MetricData;

use super::{MetricSource, MetricSourceError};

/// Metric source that serves fixed, preloaded series.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetricSource {
    data: MetricData,
}

impl InMemoryMetricSource {
    pub fn new(data: MetricData) -> Self {
        Self { data }
    }

    /// Build a source from raw series with a synthetic daily date axis of
    /// the required length.
    pub fn from_series(
        entries: &[(&str, Vec<f64>)],
    ) -> Result<Self, MetricSourceError> {
        let len = entries.first().map(|(_, s)| s.len()).unwrap_or(0);
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
        let dates: Vec<NaiveDate> = (0..len)
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        let metrics: HashMap<String, Vec<f64>> = entries
            .iter()
            .map(|(name, series)| (name.to_string(), series.clone()))
            .collect();
        Ok(Self::new(MetricData::new(dates, metrics)?))
    }
}

#[async_trait]
impl MetricSource for InMemoryMetricSource {
    async fn fetch_all(&self) -> Result<MetricData, MetricSourceError> {
        if self.data.metrics.is_empty() {
            return Err(MetricSourceError::Empty);
        }
        Ok(self.data.clone())
    }

    async fn latest_date(&self) -> Result<NaiveDate, MetricSourceError> {
        self.data
            .dates
            .last()
            .copied()
            .ok_or(MetricSourceError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_preloaded_series() {
        let source = InMemoryMetricSource::from_series(&[
            ("close", vec![1.0, 2.0]),
            ("marketcap", vec![10.0, 20.0]),
        ])
        .unwrap();

        let data = source.fetch_all().await.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.series("close"), Some(&[1.0, 2.0][..]));

        let latest = source.latest_date().await.unwrap();
        assert_eq!(latest, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    }

    #[tokio::test]
    async fn test_empty_source_errors() {
        let source = InMemoryMetricSource::default();
        assert!(matches!(
            source.fetch_all().await,
            Err(MetricSourceError::Empty)
        ));
        assert!(matches!(
            source.latest_date().await,
            Err(MetricSourceError::Empty)
        ));
    }
}
