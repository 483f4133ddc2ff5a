//! Chat engine for TalkMate.
//!
//! Provides:
//! - The chat data model (`Message`, `ImageRef`)
//! - A Gemini client for text-only and text+image prompts
//! - The `ResponseGateway`, which turns every outbound call into a reply
//! - The `SessionStore`, an observable chat session driven by UI events

pub mod gateway;
pub mod gemini;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

pub use gateway::{ResponseGateway, FALLBACK_REPLY};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatState, ChatUiEvent, SessionStore};

/// A generative model reachable through two call variants: text-only and
/// text plus one image.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<ModelResponse, AiError>;

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageRef,
    ) -> Result<ModelResponse, AiError>;
}

/// Shared, read-only reference to image bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRef {
    bytes: Arc<[u8]>,
    mime_type: String,
}

impl ImageRef {
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRef")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One entry of the chat transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    image: Option<ImageRef>,
    is_from_user: bool,
}

impl Message {
    /// A prompt typed by the user, with the image it was sent with.
    pub fn user(text: impl Into<String>, image: Option<ImageRef>) -> Self {
        Self {
            text: text.into(),
            image,
            is_from_user: true,
        }
    }

    /// A reply from the model. Replies never carry an image.
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
            is_from_user: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn is_from_user(&self) -> bool {
        self.is_from_user
    }
}

/// Result of a successful model call. `text` is `None` when the model
/// returned no text at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    pub text: Option<String>,
    pub usage: TokenUsage,
}

impl ModelResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Failure of an outbound model call. Every variant carries the
/// human-readable description shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("{0}")]
    ApiError(String),
    #[error("{0}")]
    RateLimited(String),
    #[error("{0}")]
    NetworkError(String),
    #[error("{0}")]
    ParseError(String),
}

impl AiError {
    /// The failure description, or `None` when there is nothing to show.
    pub fn description(&self) -> Option<&str> {
        let message = match self {
            AiError::ApiError(m)
            | AiError::RateLimited(m)
            | AiError::NetworkError(m)
            | AiError::ParseError(m) => m.as_str(),
        };
        (!message.trim().is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_keeps_image() {
        let image = ImageRef::new(vec![1u8, 2, 3], "image/png");
        let msg = Message::user("Describe", Some(image.clone()));
        assert!(msg.is_from_user());
        assert_eq!(msg.text(), "Describe");
        assert_eq!(msg.image(), Some(&image));
    }

    #[test]
    fn reply_has_no_image() {
        let msg = Message::reply("Hi!");
        assert!(!msg.is_from_user());
        assert!(msg.image().is_none());
    }

    #[test]
    fn image_ref_clones_share_bytes() {
        let image = ImageRef::new(vec![0u8; 64], "image/jpeg");
        let copy = image.clone();
        assert_eq!(copy.bytes().as_ptr(), image.bytes().as_ptr());
        assert_eq!(copy.len(), 64);
        assert!(!copy.is_empty());
    }

    #[test]
    fn image_ref_debug_omits_bytes() {
        let image = ImageRef::new(vec![7u8; 3], "image/webp");
        let debug = format!("{image:?}");
        assert!(debug.contains("image/webp"));
        assert!(debug.contains("len: 3"));
    }

    #[test]
    fn error_display_is_the_bare_message() {
        assert_eq!(
            AiError::NetworkError("network down".into()).to_string(),
            "network down"
        );
        assert_eq!(AiError::ApiError("quota".into()).to_string(), "quota");
    }

    #[test]
    fn blank_error_has_no_description() {
        assert_eq!(AiError::ParseError("   ".into()).description(), None);
        assert_eq!(
            AiError::RateLimited("slow down".into()).description(),
            Some("slow down")
        );
    }
}
