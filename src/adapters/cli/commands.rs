//! CLI Command Definitions
//!
//! Argument structs for all DCA tuner commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DCA Tuner - ranks Bitcoin on-chain metrics by tuned-DCA performance
#[derive(Parser, Debug)]
#[command(
    name = "dca-tuner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ranks Bitcoin on-chain metrics by softmax-tuned DCA performance",
    long_about = "For every catalog and derived metric, dca-tuner normalizes the metric \
                  with rolling z-scores, reallocates a fixed DCA budget across days with \
                  a softmax weighting model, and ranks metrics by the resulting profit \
                  against regular dollar-cost averaging."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all metrics and print the tuned-vs-regular DCA leaderboard
    Rank(RankCmd),

    /// List the metric catalog, including derived metrics
    Metrics(MetricsCmd),

    /// Print the most recent date the metric source has data for
    Latest(LatestCmd),
}

/// Run the ranking pipeline
#[derive(Parser, Debug)]
pub struct RankCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Override the DCA time range (2yr, 4yr, 8yr, all, or a day count)
    #[arg(long, value_name = "WINDOW")]
    pub dca_window: Option<String>,

    /// Override the z-score lookback range (2yr, 4yr, 8yr, all, or a day count)
    #[arg(long, value_name = "WINDOW")]
    pub zscore_window: Option<String>,

    /// Override the softmax temperature
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f64>,

    /// Override the daily budget in USD
    #[arg(long, value_name = "USD")]
    pub budget: Option<f64>,

    /// Override the metric source base URL
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,
}

/// List the metric catalog
#[derive(Parser, Debug)]
pub struct MetricsCmd {}

/// Query the latest available date
#[derive(Parser, Debug)]
pub struct LatestCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the metric source base URL
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,
}
