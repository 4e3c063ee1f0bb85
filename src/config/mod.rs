//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `REGIMA_` prefix and nested values use double underscores as separators.
//! The analysis-mode token is read from `ANALYSIS_TYPE`, which is what the
//! scheduled workflow sets.
//!
//! Rendering parameters ([`ReportSettings`]) come from the model configuration
//! file instead and are loaded alongside the tracking data.
//!
//! # Example
//!
//! ```no_run
//! use regima_insights::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading {}", config.paths.tracking_path().display());
//! ```

mod error;
mod logging;
mod paths;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use paths::PathsConfig;
pub use report::{ReportSettings, SettingsFormat};

use serde::Deserialize;

/// Environment variable carrying the analysis-mode token.
pub const ANALYSIS_TYPE_VAR: &str = "ANALYSIS_TYPE";

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Raw analysis-mode token; absent means `full`
    #[serde(default)]
    pub analysis_type: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REGIMA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Lets `ANALYSIS_TYPE` override `REGIMA__ANALYSIS_TYPE`
    ///
    /// # Environment Variable Format
    ///
    /// - `REGIMA__PATHS__DATA_DIR=/srv/regima` -> `paths.data_dir = /srv/regima`
    /// - `REGIMA__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REGIMA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if let Ok(token) = std::env::var(ANALYSIS_TYPE_VAR) {
            config.analysis_type = Some(token);
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.paths.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// The analysis-mode token, if one was supplied.
    pub fn analysis_token(&self) -> Option<&str> {
        self.analysis_type.as_deref()
    }
}
