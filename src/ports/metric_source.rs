//! Metric Source Port
//!
//! Supplies, per catalog metric, a numeric series aligned to one shared
//! date axis. Implementations must deliver equal-length series or fail
//! with an alignment error; the engine assumes validated input.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{AlignmentError, MetricData};

/// Metric source error type.
#[derive(Debug, Error)]
pub enum MetricSourceError {
    #[error("request for metric '{metric}' failed: {reason}")]
    Fetch { metric: String, reason: String },

    #[error("invalid payload for metric '{metric}': {reason}")]
    InvalidPayload { metric: String, reason: String },

    #[error(transparent)]
    Misaligned(#[from] AlignmentError),

    #[error("source returned no metrics")]
    Empty,
}

/// Read-only boundary to whatever serves the metric catalog.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Fetch every catalog metric plus the shared date axis.
    async fn fetch_all(&self) -> Result<MetricData, MetricSourceError>;

    /// Most recent date the source has data for.
    async fn latest_date(&self) -> Result<NaiveDate, MetricSourceError>;
}
