//! Configuration Types

use serde::Deserialize;

/// Development placeholder API key. Leaving it configured disables
/// enforcement entirely, so local extension builds work without a secret.
pub const DEV_API_KEY: &str = "gr_dev_key";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// API-key authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Publish endpoint configuration
    #[serde(default)]
    pub publish: PublishConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API-key authentication configuration
///
/// Enforcement is resolved once at startup (see
/// `infrastructure::http::middleware::ApiKeyAuth`): it is off when `enabled`
/// is false, and also when `api_key` is still [`DEV_API_KEY`].
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Explicit kill switch for the API-key check
    #[serde(default = "default_auth_enabled")]
    pub enabled: bool,

    /// Shared secret expected in the `X-API-Key` header
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

fn default_auth_enabled() -> bool {
    true
}

fn default_api_key() -> String {
    DEV_API_KEY.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: default_auth_enabled(),
            api_key: default_api_key(),
        }
    }
}

/// Publish endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    /// Base URL embedded in fabricated listing URLs
    #[serde(default = "default_publish_base_url")]
    pub base_url: String,
}

fn default_publish_base_url() -> String {
    "https://globalradar.eu".to_string()
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            base_url: default_publish_base_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.auth.enabled);
        assert_eq!(config.auth.api_key, DEV_API_KEY);
        assert_eq!(config.publish.base_url, "https://globalradar.eu");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }
}
