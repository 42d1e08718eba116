//! Application configuration module
//!
//! Provides the configuration type shared by both binaries. The client
//! wraps this in its own `Config` (adding the session token); the server
//! reads its settings straight from the environment.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the API server, e.g. `http://127.0.0.1:3000`
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accepts_http_url() {
        let config = AppConfig::builder()
            .server_url("http://127.0.0.1:3000".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://127.0.0.1:3000"));
    }

    #[test]
    fn builder_rejects_bare_host() {
        let result = AppConfig::builder()
            .server_url("127.0.0.1:3000".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
