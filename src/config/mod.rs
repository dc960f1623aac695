//! Configuration Module
//!
//! Loads and validates tuner configuration from TOML files.

pub mod loader;

pub use loader::{load_config, Config, ConfigError};
