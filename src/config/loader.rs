//! Configuration Loader
//!
//! Multi-source configuration loading and merging.
//!
//! Priority, highest to lowest:
//! 1. environment variables
//! 2. configuration file (config.toml)
//! 3. defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Sources merge with priority, highest to lowest:
/// 1. environment variables (prefix `GRADAR_`, section separator `__`)
/// 2. configuration file (config.toml or config.local.toml)
/// 3. defaults
///
/// # Environment examples
/// - `GRADAR_SERVER__HOST=127.0.0.1`
/// - `GRADAR_SERVER__PORT=8080`
/// - `GRADAR_AUTH__API_KEY=gr_prod_secret`
/// - `GRADAR_AUTH__ENABLED=false`
/// - `GRADAR_PUBLISH__BASE_URL=https://staging.globalradar.eu`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path.
///
/// With `None` the default search names are used and a missing file is fine.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults (lowest priority)
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("auth.enabled", true)?
        .set_default("auth.api_key", super::types::DEV_API_KEY)?
        .set_default("publish.base_url", "https://globalradar.eu")?
        .set_default("log.level", "info")?;

    // 2. Configuration file, when present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. Environment variables (highest priority)
    // Prefix GRADAR_, section separator __ (double underscore),
    // e.g. GRADAR_AUTH__API_KEY=gr_prod_secret
    builder = builder.add_source(
        Environment::with_prefix("GRADAR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the merged configuration.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.auth.enabled && config.auth.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "API key cannot be empty while auth is enabled".to_string(),
        ));
    }

    if config.publish.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Publish base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup. The API key itself is never
/// logged.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Auth enabled: {}", config.auth.enabled);
    tracing::info!(
        "Auth key: {}",
        if config.auth.api_key == super::types::DEV_API_KEY {
            "development default"
        } else {
            "configured"
        }
    );
    tracing::info!("Publish base URL: {}", config.publish.base_url);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_api_key() {
        let mut config = AppConfig::default();
        config.auth.api_key = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_api_key_allowed_when_auth_disabled() {
        let mut config = AppConfig::default();
        config.auth.enabled = false;
        config.auth.api_key = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_publish_base_url() {
        let mut config = AppConfig::default();
        config.publish.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }
}
