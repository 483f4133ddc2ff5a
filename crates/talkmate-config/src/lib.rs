//! TalkMate configuration system.
//!
//! Provides TOML-based configuration for the Gemini connection and logging.
//! All config sections use sensible defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use talkmate_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.api.text_model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ApiConfig, LogLevel, LoggingConfig, TalkmateConfig};

use std::path::Path;

use talkmate_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<TalkmateConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, falling back to the platform default
/// when `path` is `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<TalkmateConfig, ConfigError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string with the API key redacted.
pub fn config_to_json(config: &TalkmateConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.api.api_key.is_empty() {
        redacted.api.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
