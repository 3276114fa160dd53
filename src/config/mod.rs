//! Application configuration module
//!
//! Configuration is loaded from environment variables with the `config` and
//! `dotenvy` crates. Keys use the `SECRET_SANTA` prefix and nested values are
//! separated by double underscores. Every value has a default.
//!
//! # Example
//!
//! ```no_run
//! use secret_santa_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing data under {}", config.storage.root_dir.display());
//! ```

mod bot;
mod error;
mod logging;
mod storage;

pub use bot::BotConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bot identity and administrators
    #[serde(default)]
    pub bot: BotConfig,

    /// Entity store location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SECRET_SANTA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SECRET_SANTA__BOT__NAME=MySantaBot` -> `bot.name = MySantaBot`
    /// - `SECRET_SANTA__BOT__ADMIN_IDS=13,14` -> `bot.admin_ids = "13,14"`
    /// - `SECRET_SANTA__STORAGE__ROOT_DIR=/var/lib/santa` -> `storage.root_dir`
    /// - `SECRET_SANTA__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SECRET_SANTA")
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
        self.bot.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SECRET_SANTA__BOT__NAME");
        env::remove_var("SECRET_SANTA__BOT__ADMIN_IDS");
        env::remove_var("SECRET_SANTA__STORAGE__ROOT_DIR");
        env::remove_var("SECRET_SANTA__LOGGING__FORMAT");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.bot.name, "SecretSantaBot");
        assert_eq!(config.storage.root_dir, Path::new("./data"));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SECRET_SANTA__BOT__NAME", "OfficeSantaBot");
        env::set_var("SECRET_SANTA__BOT__ADMIN_IDS", "13,14");
        env::set_var("SECRET_SANTA__STORAGE__ROOT_DIR", "/tmp/santa");
        env::set_var("SECRET_SANTA__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.bot.name, "OfficeSantaBot");
        assert_eq!(config.bot.admins().unwrap().len(), 2);
        assert_eq!(config.storage.root_dir, Path::new("/tmp/santa"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_addressed_bot_name() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SECRET_SANTA__BOT__NAME", "@OfficeSantaBot");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidBotName));
    }
}
