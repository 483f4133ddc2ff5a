//! Session state and UI events.

use std::collections::VecDeque;

use crate::{ImageRef, Message};

/// Snapshot of a chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Transcript, newest first.
    pub messages: VecDeque<Message>,
    /// Prompt being typed.
    pub draft_text: String,
    /// Image attached to the prompt being typed.
    pub draft_image: Option<ImageRef>,
}

/// Events the UI dispatches to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatUiEvent {
    UpdatePrompt(String),
    UpdateImage(Option<ImageRef>),
    SendPrompt {
        prompt: String,
        image: Option<ImageRef>,
    },
}
