//! Chat session management.
//!
//! A `SessionStore` owns the transcript and the draft prompt, applies UI
//! events, and dispatches each sent prompt to the `ResponseGateway` on its
//! own task.

mod store;
mod types;


pub use store::SessionStore;
pub use types::{ChatState, ChatUiEvent};
