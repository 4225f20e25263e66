//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VAGABOT` prefix
//! and `__` (double underscore) as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use vagabot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Search backend at {}", config.backend.base_url);
//! ```

mod backend;
mod bot;
mod error;

pub use backend::BackendConfig;
pub use bot::BotConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chat-facing settings (keywords, mention identity)
    #[serde(default)]
    pub bot: BotConfig,

    /// Search backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables such as
    /// `VAGABOT__BOT__TRIGGER_KEYWORD` and `VAGABOT__BACKEND__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VAGABOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot.validate()?;
        self.backend.validate()?;
        Ok(())
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
        env::remove_var("VAGABOT__BOT__TRIGGER_KEYWORD");
        env::remove_var("VAGABOT__BACKEND__BASE_URL");
        env::remove_var("VAGABOT__BACKEND__MAX_RESULTS");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.bot.trigger_keyword, "!vagas");
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VAGABOT__BOT__TRIGGER_KEYWORD", "!empregos");
        env::set_var("VAGABOT__BACKEND__BASE_URL", "http://busca:5000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.bot.trigger_keyword, "!empregos");
        assert_eq!(config.backend.base_url, "http://busca:5000");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VAGABOT__BACKEND__MAX_RESULTS", "50");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
