//! Generative-model API connection settings.

use serde::{Deserialize, Serialize};

/// Environment variable that takes precedence over `api.api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API credential. Prefer the `GEMINI_API_KEY` environment variable.
    pub api_key: String,
    pub api_base: String,
    /// Model used for text-only prompts.
    pub text_model: String,
    /// Model used for prompts with an attached image.
    pub vision_model: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            text_model: "gemini-2.0-flash".into(),
            vision_model: "gemini-2.0-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

impl ApiConfig {
    /// Resolve the API key: `GEMINI_API_KEY` first, then the config file.
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), &self.api_key)
    }
}

fn resolve_api_key(from_env: Option<String>, configured: &str) -> Option<String> {
    from_env
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(|| {
            let configured = configured.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
}
