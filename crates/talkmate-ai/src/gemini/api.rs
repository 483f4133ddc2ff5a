//! GenerativeModel trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, GenerativeModel, ImageRef, ModelResponse};

use super::client::GeminiClient;

impl GeminiClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        image: Option<&ImageRef>,
    ) -> Result<ModelResponse, AiError> {
        let body = self.build_request_body(prompt, image);
        let url = self.api_url(model);

        debug!(model, with_image = image.is_some(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = self.parse_response(json)?;
        debug!(
            model,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "Gemini API response"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<ModelResponse, AiError> {
        self.generate(&self.config.text_model, prompt, None).await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageRef,
    ) -> Result<ModelResponse, AiError> {
        self.generate(&self.config.vision_model, prompt, Some(image))
            .await
    }
}
