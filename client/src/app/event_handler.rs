//! # Event Handler
//!
//! Applies async task results to application state. This is the only place
//! where network outcomes touch the message sequence, and any failure is
//! converted into the fixed fallback reply here - no error escapes the
//! orchestrator.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::FALLBACK_REPLY;

/// Apply an event to state.
///
/// The write lock is acquired per-event and held only for the append.
pub fn handle_event(state: &Arc<RwLock<AppState>>, event: AppEvent) {
    match event {
        AppEvent::ChatResult(result) => {
            let mut state_write = state.write();

            match result {
                Ok(response) => {
                    tracing::debug!(
                        response_length = response.response.len(),
                        "Appending AI reply"
                    );
                    state_write.chat.push_ai_message(response.response);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Chat request failed - showing fallback reply");
                    state_write.chat.push_ai_message(FALLBACK_REPLY.to_string());
                }
            }

            state_write.chat.loading = false;
        }
    }
}
