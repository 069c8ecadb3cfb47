//! Configuration for connecting to the graph model service.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`MINDLEAP__SERVICE__` prefix)
//! 2. Config file (`mindleap.toml`, `[service]` section)
//! 3. Defaults

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Connection settings for the graph model service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Load the service configuration from `<file_prefix>.toml` and the environment.
///
/// A missing file or missing `[service]` section yields the defaults; a file
/// that exists but cannot be parsed is an error.
pub fn load_service_config(file_prefix: &str) -> Result<ServiceConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("MINDLEAP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<ServiceConfig>("service") {
        Ok(c) => Ok(c),
        Err(e) => {
            tracing::debug!(error = %e, "No service configuration found, using defaults");
            Ok(ServiceConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MindleapError;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("mindleap.toml"),
            "[service]\nbase_url = \"https://graph.example.com/api\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let prefix = dir.path().join("mindleap");
        let config = load_service_config(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "https://graph.example.com/api");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("partial.toml"), "[service]\ntimeout_secs = 2\n").unwrap();

        let prefix = dir.path().join("partial");
        let config = load_service_config(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let config = load_service_config(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[service\nbase_url = ").unwrap();

        let prefix = dir.path().join("broken");
        let err = load_service_config(prefix.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, MindleapError::Config(_)), "{err}");
        assert!(err.to_string().starts_with("Configuration error: "));
    }
}
