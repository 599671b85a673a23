//! # Application State Types
//!
//! All state-related types for the application: the chat message sequence,
//! the input buffer, and the in-flight request flag.

use std::sync::Arc;

use crate::services::api::ApiClient;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSender {
    /// The human user typing into the input box
    User,
    /// The AI backend (including the fallback reply on failure)
    Ai,
}

/// A single chat message.
///
/// Messages are immutable once appended and live only in memory for the
/// duration of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Monotonic identifier derived from submission time (Unix millis)
    pub id: i64,
    /// Message body
    pub text: String,
    /// Sender tag
    pub sender: MessageSender,
}

/// Chat sub-state: the append-only message sequence plus input handling.
#[derive(Debug, Clone)]
pub struct ChatState {
    /// Messages in causal submission/response order
    pub messages: Vec<ChatMessage>,
    /// Current message input text
    pub message_input: String,
    /// Whether a request is currently in flight (input is disabled while set)
    pub loading: bool,
    /// Highest id handed out so far, for monotonicity under clock ties
    last_message_id: i64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            message_input: String::new(),
            loading: false,
            last_message_id: 0,
        }
    }
}

impl ChatState {
    /// Allocate the next message id.
    ///
    /// Ids derive from submission time (Unix millis) but are forced strictly
    /// monotonic when two messages land within the same millisecond, so
    /// ordering always reflects causal order.
    pub fn next_message_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = if now <= self.last_message_id {
            self.last_message_id + 1
        } else {
            now
        };
        self.last_message_id = id;
        id
    }

    /// Append a user-authored message.
    pub fn push_user_message(&mut self, text: String) {
        let id = self.next_message_id();
        self.messages.push(ChatMessage {
            id,
            text,
            sender: MessageSender::User,
        });
    }

    /// Append an AI-authored message.
    pub fn push_ai_message(&mut self, text: String) {
        let id = self.next_message_id();
        self.messages.push(ChatMessage {
            id,
            text,
            sender: MessageSender::Ai,
        });
    }
}

/// Global application state
pub struct AppState {
    /// Chat state (message sequence, input buffer, loading flag)
    pub chat: ChatState,
    /// API client
    pub api_client: Arc<ApiClient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_state_default_is_empty() {
        let chat = ChatState::default();

        assert!(chat.messages.is_empty());
        assert!(chat.message_input.is_empty());
        assert!(!chat.loading);
    }

    #[test]
    fn test_message_ids_are_strictly_monotonic() {
        let mut chat = ChatState::default();

        // Allocate many ids back to back; several will land in the same
        // millisecond and must still come out strictly increasing
        let ids: Vec<i64> = (0..100).map(|_| chat.next_message_id()).collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must be strictly increasing");
        }
    }

    #[test]
    fn test_push_preserves_causal_order() {
        let mut chat = ChatState::default();

        chat.push_user_message("first".to_string());
        chat.push_ai_message("second".to_string());
        chat.push_user_message("third".to_string());

        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[0].text, "first");
        assert_eq!(chat.messages[0].sender, MessageSender::User);
        assert_eq!(chat.messages[1].text, "second");
        assert_eq!(chat.messages[1].sender, MessageSender::Ai);
        assert_eq!(chat.messages[2].text, "third");

        assert!(chat.messages[0].id < chat.messages[1].id);
        assert!(chat.messages[1].id < chat.messages[2].id);
    }
}
