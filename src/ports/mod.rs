//! Ports Layer - Trait abstractions for external collaborators
//!
//! The engine never fetches anything itself; it is handed complete,
//! date-aligned series through the `MetricSource` boundary.

pub mod metric_source;
pub mod mocks;

pub use metric_source::{MetricSource, MetricSourceError};
pub use mocks::InMemoryMetricSource;
