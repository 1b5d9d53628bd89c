//! Hierarchical configuration loading.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("base_url must be set (e.g., https://your-instance.atlassian.net)")]
    MissingBaseUrl,

    #[error("Either username/password or an access_key must be provided")]
    MissingCredentials,

    #[error("Invalid fetch.max_concurrent: {0}. Must be between 1 and 64")]
    InvalidMaxConcurrent(usize),

    #[error("Invalid fetch.requests_per_minute: {0}. Must be at least 1")]
    InvalidRequestBudget(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .zephyr-insight/config.yaml (project config)
    /// 3. .zephyr-insight/local.yaml (project local overrides, optional)
    /// 4. Environment variables (`ZEPHYR_`* prefix, highest priority)
    ///
    /// The classic variables `ZEPHYR_BASE_URL`, `ZEPHYR_USERNAME`,
    /// `ZEPHYR_PASSWORD`, and `ZEPHYR_ACCESS_KEY` map onto the top-level
    /// connection fields; nested sections use `__` (e.g.
    /// `ZEPHYR_FETCH__MAX_CONCURRENT`).
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".zephyr-insight/config.yaml"))
            .merge(Yaml::file(".zephyr-insight/local.yaml"))
            .merge(Env::prefixed("ZEPHYR_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still apply on top, so a checked-in config
    /// file can omit credentials.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("ZEPHYR_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        // Credentials rule: an access key alone, or both basic fields.
        let has_basic = !config.username.is_empty() && !config.password.is_empty();
        if !config.uses_access_key() && !has_basic {
            return Err(ConfigError::MissingCredentials);
        }

        if config.fetch.max_concurrent == 0 || config.fetch.max_concurrent > 64 {
            return Err(ConfigError::InvalidMaxConcurrent(
                config.fetch.max_concurrent,
            ));
        }

        if config.fetch.requests_per_minute == 0 {
            return Err(ConfigError::InvalidRequestBudget(
                config.fetch.requests_per_minute,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
