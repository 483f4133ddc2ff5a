//! Gemini API client struct, request building, and response parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{AiError, ImageRef, ModelResponse, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            model
        )
    }

    /// Build the JSON request body for a single-turn prompt.
    pub(crate) fn build_request_body(
        &self,
        prompt: &str,
        image: Option<&ImageRef>,
    ) -> serde_json::Value {
        let mut parts = vec![serde_json::json!({ "text": prompt })];
        if let Some(image) = image {
            parts.push(serde_json::json!({
                "inlineData": {
                    "mimeType": image.mime_type(),
                    "data": STANDARD.encode(image.bytes()),
                }
            }));
        }

        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": parts,
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<ModelResponse, AiError> {
        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        let candidates = json["candidates"].as_array();
        let first = match candidates.and_then(|c| c.first()) {
            Some(first) => first,
            None => {
                if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                    return Err(AiError::ApiError(format!(
                        "Response was blocked: {reason}"
                    )));
                }
                if candidates.is_none() {
                    return Err(AiError::ParseError("no candidates in response".to_string()));
                }
                return Err(AiError::ParseError("empty candidates".to_string()));
            }
        };

        let text: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        Ok(ModelResponse {
            text: (!text.is_empty()).then_some(text),
            usage,
        })
    }

    /// Turn a non-success HTTP response into an error carrying the API's
    /// own message when it sent one.
    pub(crate) fn parse_error(status: reqwest::StatusCode, body: &str) -> AiError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            AiError::RateLimited(message)
        } else {
            AiError::ApiError(message)
        }
    }
}
