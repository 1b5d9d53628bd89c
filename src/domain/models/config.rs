//! Configuration model.
//!
//! Connection settings sit at the top level so the classic environment
//! variables (`ZEPHYR_BASE_URL`, `ZEPHYR_USERNAME`, `ZEPHYR_PASSWORD`,
//! `ZEPHYR_ACCESS_KEY`) map onto them directly through the loader's
//! `ZEPHYR_` prefix.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the engine and its Zephyr client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL of the Zephyr instance (e.g., `https://your-instance.atlassian.net`).
    #[serde(default)]
    pub base_url: String,

    /// Username for HTTP basic auth.
    #[serde(default)]
    pub username: String,

    /// Password for HTTP basic auth.
    #[serde(default)]
    pub password: String,

    /// Bearer access key; when set it takes precedence over basic auth.
    #[serde(default)]
    pub access_key: String,

    /// Fetch fan-out configuration.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Whether bearer-token auth is configured.
    pub fn uses_access_key(&self) -> bool {
        !self.access_key.is_empty()
    }
}

/// Settings for the concurrent per-cycle execution fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FetchConfig {
    /// Maximum number of in-flight remote fetches (1-64).
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Requests per minute allowed against the remote API.
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,
}

const fn default_max_concurrent() -> usize {
    8
}

const fn default_requests_per_minute() -> u32 {
    120
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            requests_per_minute: default_requests_per_minute(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fetch.max_concurrent, 8);
        assert_eq!(config.fetch.requests_per_minute, 120);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(!config.uses_access_key());
    }

    #[test]
    fn test_access_key_precedence_flag() {
        let config = Config {
            access_key: "token".to_string(),
            ..Default::default()
        };
        assert!(config.uses_access_key());
    }
}
