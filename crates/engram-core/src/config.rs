//! Configuration management for the engram system.

use serde::{Deserialize, Serialize};

use crate::error::{EngramError, EngramResult};
use crate::pattern::Encoding;

/// Network behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Cell value domain for patterns and activations.
    #[serde(default)]
    pub encoding: Encoding,
    /// Hard cap on relaxation sweeps before recall gives up with
    /// `NonConvergence`.
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: usize,
}

fn default_max_sweeps() -> usize {
    100
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            max_sweeps: default_max_sweeps(),
        }
    }
}

impl NetworkConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> EngramResult<()> {
        if self.max_sweeps == 0 {
            return Err(EngramError::Config(
                "network.max_sweeps must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration, consumed by binaries when installing their
/// `tracing` subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{ENGRAM_ENV}.toml (environment-specific)
    /// 3. Environment variables with ENGRAM_ prefix
    pub fn load() -> EngramResult<Self> {
        let env = std::env::var("ENGRAM_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("ENGRAM").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> EngramResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngramError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| EngramError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> EngramResult<()> {
        self.network.validate()
    }
}
