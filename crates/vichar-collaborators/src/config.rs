//! Backend endpoint configuration.
//!
//! Reads `~/.config/vichar/config.toml`:
//!
//! ```toml
//! [backend]
//! base_url = "https://api.example.com"
//! api_key = "..."          # optional
//! timeout_secs = 60        # optional
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use vichar_core::error::{Result, VicharError};
use vichar_infrastructure::VicharPaths;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Root configuration structure for config.toml.
#[derive(Debug, Clone, Deserialize)]
struct ConfigRoot {
    backend: BackendConfig,
}

/// Connection settings for the finance-app backend that hosts the AI
/// collaborator endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request, if the deployment requires one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds. Timeout behavior is delegated
    /// entirely to the transport; the coordinator enforces none itself.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl BackendConfig {
    /// Creates a config pointing at the given base URL with defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the configuration from the default location
    /// (`~/.config/vichar/config.toml`).
    pub fn default_location() -> Result<Self> {
        Self::from_file(VicharPaths::config_file()?)
    }

    /// Loads the configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VicharError::config(format!(
                "Configuration file not found at: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            VicharError::config(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        let root: ConfigRoot = toml::from_str(&content).map_err(|e| {
            VicharError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(root.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let root: ConfigRoot = toml::from_str(
            r#"
            [backend]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(root.backend.base_url, "https://api.example.com");
        assert!(root.backend.api_key.is_none());
        assert_eq!(root.backend.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_full_config() {
        let root: ConfigRoot = toml::from_str(
            r#"
            [backend]
            base_url = "https://api.example.com"
            api_key = "secret"
            timeout_secs = 15
            "#,
        )
        .unwrap();

        assert_eq!(root.backend.api_key.as_deref(), Some("secret"));
        assert_eq!(root.backend.timeout_secs, 15);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = BackendConfig::from_file("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(err, VicharError::Config(_)));
    }
}
