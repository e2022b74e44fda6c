//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INCLUSIVE_AID_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use inclusive_aid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod profile_api;
mod server;
mod storage;
mod sync;

pub use error::{ConfigError, ValidationError};
pub use profile_api::ProfileApiConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;
pub use sync::SyncConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the InclusiveAID service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Profile API client configuration (base URL, API key)
    #[serde(default)]
    pub profile_api: ProfileApiConfig,

    /// Local preference storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Synchronization configuration (debounce window)
    #[serde(default)]
    pub sync: SyncConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INCLUSIVE_AID` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INCLUSIVE_AID__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `INCLUSIVE_AID__PROFILE_API__BASE_URL=...` -> `profile_api.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INCLUSIVE_AID")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.profile_api.validate(&self.server.environment)?;
        self.storage.validate()?;
        self.sync.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("INCLUSIVE_AID__SERVER__PORT");
        env::remove_var("INCLUSIVE_AID__SERVER__ENVIRONMENT");
        env::remove_var("INCLUSIVE_AID__PROFILE_API__BASE_URL");
        env::remove_var("INCLUSIVE_AID__SYNC__DEBOUNCE_MS");
    }

    #[test]
    fn test_load_with_all_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.profile_api.base_url, "http://localhost:8080");
        assert_eq!(config.sync.debounce_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INCLUSIVE_AID__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_debounce() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INCLUSIVE_AID__SYNC__DEBOUNCE_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.sync.debounce_ms, 250);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INCLUSIVE_AID__SERVER__ENVIRONMENT", "production");
        env::set_var(
            "INCLUSIVE_AID__PROFILE_API__BASE_URL",
            "https://profiles.example.com",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_ok());
    }
}
