//! Configuration Module
//!
//! Layered configuration sources, highest priority first:
//! - environment variables
//! - configuration file (TOML)
//! - defaults

mod loader;
mod types;

pub use loader::{load_config, print_config, ConfigError};
pub use types::{AppConfig, AuthConfig, LogConfig, PublishConfig, ServerConfig, DEV_API_KEY};
