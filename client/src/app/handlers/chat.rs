//! # Chat Handlers
//!
//! Submission handling for the chat input.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;

/// Placeholder user id sent with every chat request.
pub const DEFAULT_USER_ID: i64 = 1;

/// Handle a chat submit action (Send button or Enter).
///
/// Rejects the submission when a request is already in flight or when the
/// trimmed input is empty; neither case changes state or touches the
/// network. Otherwise the user message is appended synchronously (optimistic
/// update), the input is cleared, the loading flag is set, and the network
/// round trip is spawned.
pub fn handle_send_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let text = {
        let mut state_write = state.write();

        if state_write.chat.loading {
            tracing::debug!("Ignoring submit while a request is in flight");
            return;
        }

        let trimmed = state_write.chat.message_input.trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        state_write.chat.push_user_message(trimmed.clone());
        state_write.chat.message_input.clear();
        state_write.chat.loading = true;

        trimmed
    };

    tracing::info!(
        message_length = text.len(),
        preview = %shared::utils::truncate_preview(&text, 32),
        "Submitting chat message"
    );

    let service = {
        let state_read = state.read();
        state_read.api_client.clone()
    };

    tasks::chat::send_chat_message(service, event_tx, text);
}
