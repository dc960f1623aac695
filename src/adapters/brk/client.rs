//! BRK API Client
//!
//! Fetches the metric catalog from a Bitcoin Research Kit instance. Each
//! metric is one request to the date-indexed vector query endpoint, issued
//! concurrently (one in-flight request per metric); the payload is a
//! two-element array `[dates, values]` where values may contain nulls for
//! days without an observation. Nulls become NaN, which the engine treats
//! as invalid samples.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::debug;

use crate::domain::MetricData;
use crate::metrics::METRICS;
use crate::ports::{MetricSource, MetricSourceError};

/// Default BRK instance.
pub const DEFAULT_API_BASE: &str = "https://bitcoinresearchkit.org";

/// BRK client configuration.
#[derive(Debug, Clone)]
pub struct BrkConfig {
    /// Base URL of the BRK instance.
    pub api_base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BrkConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP metric source for a BRK instance.
#[derive(Debug, Clone)]
pub struct BrkClient {
    config: BrkConfig,
    http: Client,
}

impl BrkClient {
    /// Create a client against the default instance.
    pub fn new() -> Result<Self, MetricSourceError> {
        Self::with_config(BrkConfig::default())
    }

    pub fn with_config(config: BrkConfig) -> Result<Self, MetricSourceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MetricSourceError::Fetch {
                metric: "*".to_string(),
                reason: format!("failed to create HTTP client: {}", e),
            })?;
        Ok(Self { config, http })
    }

    /// Fetch one metric's `[dates, values]` pair.
    async fn fetch_metric(
        &self,
        metric: &str,
    ) -> Result<(Vec<NaiveDate>, Vec<f64>), MetricSourceError> {
        let url = format!(
            "{}/api/vecs/query?index=dateindex&ids=date,{}&format=json",
            self.config.api_base_url, metric
        );
        debug!(metric, %url, "fetching metric");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_err(metric, e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err(metric, format!("HTTP {}", response.status())));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| fetch_err(metric, e.to_string()))?;
        parse_payload(metric, &payload)
    }
}

#[async_trait]
impl MetricSource for BrkClient {
    async fn fetch_all(&self) -> Result<MetricData, MetricSourceError> {
        let mut tasks = JoinSet::new();
        for &metric in METRICS.iter() {
            let client = self.clone();
            tasks.spawn(async move {
                let series = client.fetch_metric(metric).await?;
                Ok::<_, MetricSourceError>((metric, series))
            });
        }

        let mut dates: Option<Vec<NaiveDate>> = None;
        let mut metrics: HashMap<String, Vec<f64>> = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            let (metric, (metric_dates, values)) =
                joined.map_err(|e| fetch_err("*", e.to_string()))??;
            // All metrics share the dateindex axis; keep the first one.
            if dates.is_none() {
                dates = Some(metric_dates);
            }
            metrics.insert(metric.to_string(), values);
        }

        let dates = dates.ok_or(MetricSourceError::Empty)?;
        Ok(MetricData::new(dates, metrics)?)
    }

    async fn latest_date(&self) -> Result<NaiveDate, MetricSourceError> {
        let url = format!(
            "{}/api/vecs/dateindex-to-date?from=-1",
            self.config.api_base_url
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_err("date", e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err("date", format!("HTTP {}", response.status())));
        }

        let date: String = response
            .json()
            .await
            .map_err(|e| fetch_err("date", e.to_string()))?;
        parse_date("date", &date)
    }
}

fn fetch_err(metric: &str, reason: String) -> MetricSourceError {
    MetricSourceError::Fetch {
        metric: metric.to_string(),
        reason,
    }
}

fn payload_err(metric: &str, reason: &str) -> MetricSourceError {
    MetricSourceError::InvalidPayload {
        metric: metric.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_date(metric: &str, raw: &str) -> Result<NaiveDate, MetricSourceError> {
    raw.parse::<NaiveDate>()
        .map_err(|e| payload_err(metric, &format!("bad date '{}': {}", raw, e)))
}

/// Decode the `[dates, values]` response shape. Null values map to NaN.
fn parse_payload(
    metric: &str,
    payload: &serde_json::Value,
) -> Result<(Vec<NaiveDate>, Vec<f64>), MetricSourceError> {
    let rows = payload
        .as_array()
        .filter(|rows| rows.len() >= 2)
        .ok_or_else(|| payload_err(metric, "expected a [dates, values] array pair"))?;

    let dates = rows[0]
        .as_array()
        .ok_or_else(|| payload_err(metric, "dates row is not an array"))?
        .iter()
        .map(|d| {
            d.as_str()
                .ok_or_else(|| payload_err(metric, "date entry is not a string"))
                .and_then(|s| parse_date(metric, s))
        })
        .collect::<Result<Vec<NaiveDate>, _>>()?;

    let values = rows[1]
        .as_array()
        .ok_or_else(|| payload_err(metric, "values row is not an array"))?
        .iter()
        .map(|v| {
            if v.is_null() {
                Ok(f64::NAN)
            } else {
                v.as_f64()
                    .ok_or_else(|| payload_err(metric, "value entry is not a number"))
            }
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok((dates, values))
}
