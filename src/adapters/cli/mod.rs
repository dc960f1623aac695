//! CLI Adapter
//!
//! Command-line surface for the DCA tuner.

pub mod commands;

pub use commands::{CliApp, Command, LatestCmd, MetricsCmd, RankCmd};
