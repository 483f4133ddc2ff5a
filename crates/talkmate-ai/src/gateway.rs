//! Response gateway: one outbound call per prompt, always yielding a reply.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{GenerativeModel, ImageRef, Message};

/// Reply text used when a failure or an empty response has nothing to say.
pub const FALLBACK_REPLY: &str = "Unexpected error!";

/// Issues exactly one model call per prompt and converts every outcome,
/// including failures, into a reply `Message`.
#[derive(Clone)]
pub struct ResponseGateway {
    model: Arc<dyn GenerativeModel>,
}

impl ResponseGateway {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Get the model's reply to `text`, using the text+image variant when
    /// an image is attached. Never fails; no retry.
    pub async fn get_reply(&self, text: &str, image: Option<&ImageRef>) -> Message {
        let result = match image {
            Some(image) => {
                debug!(
                    mime_type = image.mime_type(),
                    len = image.len(),
                    "sending prompt with image"
                );
                self.model.generate_with_image(text, image).await
            }
            None => {
                debug!("sending text prompt");
                self.model.generate_text(text).await
            }
        };

        match result {
            Ok(response) => Message::reply(
                response
                    .text
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            ),
            Err(e) => {
                warn!(error = %e, "model call failed");
                Message::reply(e.description().unwrap_or(FALLBACK_REPLY))
            }
        }
    }
}
