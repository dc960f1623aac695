//! Metric Catalog and Derived Metrics
//!
//! The base catalog names the on-chain series fetched from the metric
//! source; the derived registry is the closed set of composite metrics
//! computed from them.

pub mod catalog;
pub mod derived;

pub use catalog::METRICS;
pub use derived::{compute_derived_metrics, DerivedMetric};
