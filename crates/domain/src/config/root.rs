use serde::Deserialize;
use std::path::Path;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::failover::FailoverConfig;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub failover: FailoverConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub max_entries: Option<usize>,
}

impl Config {
    /// Load configuration from `path` (defaults when `None`) and apply the
    /// CLI overrides. The result is not validated.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(max_entries) = overrides.max_entries {
            self.cache.max_entries = max_entries;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.sweep_interval_secs must be greater than 0".into(),
            ));
        }

        if self.failover.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "failover.timeout_ms must be greater than 0".into(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
