//! Plain-text rendering of the chat transcript.

use talkmate_ai::{ChatState, Message};

/// One transcript line for a message.
pub fn format_message(message: &Message) -> String {
    let speaker = if message.is_from_user() { "you" } else { "gemini" };
    match message.image() {
        Some(image) => format!(
            "{speaker}> {} [image: {}, {} bytes]",
            message.text(),
            image.mime_type(),
            image.len()
        ),
        None => format!("{speaker}> {}", message.text()),
    }
}

/// The whole transcript, most recent message first.
pub fn render_transcript(state: &ChatState) -> String {
    state
        .messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Messages prepended since `seen` messages were last shown, oldest first.
pub fn new_messages(state: &ChatState, seen: usize) -> impl Iterator<Item = &Message> {
    let fresh = state.messages.len().saturating_sub(seen);
    state.messages.iter().take(fresh).rev()
}
