//! Observable session store.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::gateway::ResponseGateway;
use crate::{ImageRef, Message};

use super::types::{ChatState, ChatUiEvent};

/// Single owner of a chat session's state.
///
/// Every mutation goes through the watch channel's `send_modify`, so
/// writers are serialized and subscribers see each change. Cloning the
/// store yields another handle to the same session.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<ChatState>>,
    gateway: ResponseGateway,
}

impl SessionStore {
    pub fn new(gateway: ResponseGateway) -> Self {
        let (state, _) = watch::channel(ChatState::default());
        Self {
            state: Arc::new(state),
            gateway,
        }
    }

    /// Apply a UI event. Returns the reply task when the event sent a prompt.
    pub fn on_event(&self, event: ChatUiEvent) -> Option<JoinHandle<()>> {
        match event {
            ChatUiEvent::UpdatePrompt(text) => {
                self.update_draft_text(text);
                None
            }
            ChatUiEvent::UpdateImage(image) => {
                self.update_draft_image(image);
                None
            }
            ChatUiEvent::SendPrompt { prompt, image } => self.submit(prompt, image),
        }
    }

    pub fn update_draft_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|state| state.draft_text = text);
    }

    pub fn update_draft_image(&self, image: Option<ImageRef>) {
        self.state.send_modify(|state| state.draft_image = image);
    }

    /// Send a prompt.
    ///
    /// Blank prompts are ignored and return `None`. Otherwise the user
    /// message is prepended and the draft cleared in one update, then the
    /// gateway is called on a new task whose reply is prepended when it
    /// resolves. Must be called from within a tokio runtime.
    pub fn submit(
        &self,
        text: impl Into<String>,
        image: Option<ImageRef>,
    ) -> Option<JoinHandle<()>> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("ignoring blank prompt");
            return None;
        }

        self.state.send_modify(|state| {
            state
                .messages
                .push_front(Message::user(text.clone(), image.clone()));
            state.draft_text.clear();
            state.draft_image = None;
        });

        let state = Arc::clone(&self.state);
        let gateway = self.gateway.clone();
        Some(tokio::spawn(async move {
            let reply = gateway.get_reply(&text, image.as_ref()).await;
            state.send_modify(|state| state.messages.push_front(reply));
        }))
    }

    /// Current state.
    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    pub fn message_count(&self) -> usize {
        self.state.borrow().messages.len()
    }
}
