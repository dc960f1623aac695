//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching
//! config/default.toml structure. Window ranges are stored as strings
//! ("2yr", "4yr", "8yr", "all", or a day count) and parsed into
//! `WindowSize` during validation.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::brk::{BrkConfig, DEFAULT_API_BASE};
use crate::application::RankSettings;
use crate::domain::{WindowSize, WindowSizeParseError};
use crate::engine::WeightingModel;

/// Temperature bounds exposed to configuration. The engine itself only
/// rejects non-positive temperatures; this range mirrors the tuning range
/// the leaderboard was calibrated for.
const MIN_TEMPERATURE: f64 = 0.1;
const MAX_TEMPERATURE: f64 = 3.0;

/// Main configuration structure matching config/default.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dca: DcaSection,
    pub zscore: ZScoreSection,
    pub model: ModelSection,
    pub source: SourceSection,
    pub logging: LoggingSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dca: DcaSection::default(),
            zscore: ZScoreSection::default(),
            model: ModelSection::default(),
            source: SourceSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

/// DCA strategy section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DcaSection {
    /// Dollars invested per day.
    pub budget_per_day: f64,
    /// Trailing investment window: "2yr", "4yr", "8yr", "all", or days.
    pub time_range: String,
}

impl Default for DcaSection {
    fn default() -> Self {
        Self {
            budget_per_day: 10.0,
            time_range: "4yr".to_string(),
        }
    }
}

/// Z-score normalization section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZScoreSection {
    /// Rolling lookback window: "2yr", "4yr", "8yr", "all", or days.
    pub time_range: String,
}

impl Default for ZScoreSection {
    fn default() -> Self {
        Self {
            time_range: "4yr".to_string(),
        }
    }
}

/// Weighting model section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    /// Model kind; only "softmax" is registered.
    pub kind: String,
    /// Softmax temperature; lower is more aggressive.
    pub temperature: f64,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            kind: "softmax".to_string(),
            temperature: 1.0,
        }
    }
}

/// Metric source section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Base URL of the BRK instance
    /// (alternate public instance: https://brk.openonchain.dev).
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Logging section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    InvalidWindow(#[from] WindowSizeParseError),

    #[error("unknown weighting model '{0}' (expected: softmax)")]
    UnknownModel(String),

    #[error("temperature {0} out of range ({MIN_TEMPERATURE}..={MAX_TEMPERATURE})")]
    TemperatureOutOfRange(f64),

    #[error("budget_per_day must be positive, got {0}")]
    InvalidBudget(f64),
}

impl Config {
    /// Validate all sections and build the per-call pipeline settings.
    pub fn rank_settings(&self) -> Result<RankSettings, ConfigError> {
        let dca_window: WindowSize = self.dca.time_range.parse()?;
        let zscore_window: WindowSize = self.zscore.time_range.parse()?;
        let model = match self.model.kind.as_str() {
            "softmax" => WeightingModel::Softmax,
            other => return Err(ConfigError::UnknownModel(other.to_string())),
        };
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.model.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.model.temperature));
        }
        if !(self.dca.budget_per_day > 0.0) || !self.dca.budget_per_day.is_finite() {
            return Err(ConfigError::InvalidBudget(self.dca.budget_per_day));
        }

        Ok(RankSettings {
            dca_window,
            zscore_window,
            budget_per_day: self.dca.budget_per_day,
            temperature: self.model.temperature,
            model,
        })
    }

    /// BRK client configuration for the source section.
    pub fn brk_config(&self) -> BrkConfig {
        BrkConfig {
            api_base_url: self.source.api_base_url.clone(),
            timeout: std::time::Duration::from_secs(self.source.timeout_secs),
        }
    }
}

/// Load configuration from a TOML file. A missing file yields the built-in
/// defaults so `rank` works out of the box.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&raw)?)
}
