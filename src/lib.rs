//! DCA Tuner - Bitcoin metric-ranked dollar-cost averaging
//!
//! Compares a fixed-budget regular DCA strategy against a "tuned" strategy
//! that reallocates the same total budget across days using a
//! softmax-weighted function of each on-chain metric's rolling z-score,
//! then ranks every metric by the tuned strategy's profit.
//!
//! # Modules
//!
//! - `domain`: date-aligned series, window sizes, leaderboard rows
//! - `engine`: z-scores, softmax weighting, the two DCA allocators
//! - `metrics`: base metric catalog and the derived-metric registry
//! - `application`: the ranking aggregator and its per-call settings
//! - `ports`: the `MetricSource` trait boundary
//! - `adapters`: BRK HTTP metric source, CLI surface
//! - `config`: TOML configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod engine;
pub mod metrics;
pub mod ports;
