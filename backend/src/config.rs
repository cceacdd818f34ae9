//! Configuration management for the FarmTracker server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM prefix and `__` separator,
//!    e.g. `FARM__SERVER__PORT` or `FARM__TIMELINE__TABLE_PATH`

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::TimelineTable;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Crop timeline reference data
    #[serde(default)]
    pub timeline: TimelineConfig,

    /// Plant assistant configuration
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimelineConfig {
    /// JSON file replacing the built-in timeline table
    pub table_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Simulated processing delay before each reply
    pub reply_delay_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("assistant.reply_delay_ms", 1500)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl TimelineConfig {
    /// Built-in table, or the configured override file
    pub fn load_table(&self) -> AppResult<TimelineTable> {
        match &self.table_path {
            None => Ok(TimelineTable::builtin()),
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Configuration(format!("cannot read timeline table {}: {}", path, e))
                })?;
                Ok(TimelineTable::from_json(&json)?)
            }
        }
    }
}

impl AssistantConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
        }
    }
}
