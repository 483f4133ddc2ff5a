//! Test doubles for the generative model.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::{AiError, GenerativeModel, ImageRef, ModelResponse};

/// Which call variant a model received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Text(String),
    WithImage(String, ImageRef),
}

/// Records every call and answers with a fixed outcome. When gated, each
/// call waits for its own `release()` before answering.
pub(crate) struct MockModel {
    outcome: Result<ModelResponse, AiError>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Semaphore>,
}

impl MockModel {
    pub(crate) fn replying(text: &str) -> Self {
        Self::with_outcome(Ok(ModelResponse::text(text)))
    }

    pub(crate) fn failing(err: AiError) -> Self {
        Self::with_outcome(Err(err))
    }

    pub(crate) fn with_outcome(outcome: Result<ModelResponse, AiError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: Call) -> Result<ModelResponse, AiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.outcome.clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_text(&self, prompt: &str) -> Result<ModelResponse, AiError> {
        self.answer(Call::Text(prompt.to_string())).await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageRef,
    ) -> Result<ModelResponse, AiError> {
        self.answer(Call::WithImage(prompt.to_string(), image.clone()))
            .await
    }
}
