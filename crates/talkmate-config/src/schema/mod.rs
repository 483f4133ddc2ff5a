//! Configuration schema types for TalkMate.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod logging;

pub use api::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration for TalkMate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TalkmateConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_api() {
        let config = TalkmateConfig::default();
        assert!(config.api.api_key.is_empty());
        assert_eq!(
            config.api.api_base,
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
        assert_eq!(config.api.text_model, "gemini-2.0-flash");
        assert_eq!(config.api.vision_model, "gemini-2.0-flash");
        assert_eq!(config.api.max_tokens, 4096);
        assert!((config.api.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.api.request_timeout_secs, 120);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = TalkmateConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_serializes_uppercase() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
        let level: LogLevel = serde_json::from_str("\"DEBUG\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TalkmateConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.text_model, "gemini-2.0-flash");
        assert_eq!(config.logging.level, LogLevel::Info);
    }
}
