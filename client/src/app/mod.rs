//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, the async
//! network task, and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_send_click() - user action handler         │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task (Tokio)                             │
//! │  tasks::chat::send_chat_message() - chat round trip         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Flow
//!
//! Strictly unidirectional: user input → state update (optimistic user
//! message append) → network call → state update (AI reply or fallback) →
//! re-render. While the request is pending, the `loading` flag disables the
//! input and rejects further submission, so at most one request is ever in
//! flight.
//!
//! ## State Management Pattern
//!
//! State is wrapped in `Arc<RwLock<AppState>>` (parking_lot). Locks are held
//! for minimal duration to prevent UI freezing; only the orchestrator ever
//! mutates the message sequence.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::services::api::ApiClient;

/// Fixed user-facing reply substituted for any chat failure.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Main application orchestrator.
///
/// Owns the shared state and the event channel that async tasks use to
/// report results back to the main thread.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for rendering (shared lock, multiple readers)
    /// - Use `write()` for updates (exclusive lock, single writer)
    /// - Hold locks for minimal duration to prevent UI freezing
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (cloned into spawned tasks).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance with initial state.
    ///
    /// Initial state is an empty message sequence, an empty input buffer,
    /// and no request in flight. The API client resolves its base URL from
    /// the environment once, here.
    pub fn new() -> Self {
        let api_client = Arc::new(ApiClient::new());

        let state = AppState {
            chat: ChatState::default(),
            api_client,
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to process async events and update state.
    ///
    /// Drains all pending events from `event_rx` using `try_recv()`:
    /// non-blocking, processes multiple events per tick if available.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle async event results.
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        event_handler::handle_event(&self.state, event);
    }

    /// Handle a chat submit action (Send button or Enter).
    pub fn handle_send_click(&mut self) {
        handlers::chat::handle_send_click(self.state.clone(), self.event_tx.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process async events (non-blocking)
        self.on_tick();

        // Keep repainting while a request is pending so the result is
        // picked up promptly and the thinking indicator animates
        if self.state.read().chat.loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::ui::screens::chat::render(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use shared::dto::chat::ChatResponse;

    use crate::core::AppError;

    fn app_with_input(input: &str) -> App {
        let mut app = App::new();
        app.state.write().chat.message_input = input.to_string();
        app
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state_is_empty() {
        let app = App::new();
        let state = app.state.read();

        assert!(state.chat.messages.is_empty());
        assert!(state.chat.message_input.is_empty());
        assert!(!state.chat.loading);
    }

    // ========== Submission Tests ==========

    #[test]
    fn test_send_appends_user_message_synchronously() {
        let mut app = app_with_input("Hello AI");

        app.handle_send_click();

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 1);
        assert_eq!(state.chat.messages[0].text, "Hello AI");
        assert_eq!(state.chat.messages[0].sender, MessageSender::User);
        assert!(state.chat.loading);
        assert!(state.chat.message_input.is_empty());
    }

    #[test]
    fn test_send_trims_input() {
        let mut app = app_with_input("  Hello AI  \n");

        app.handle_send_click();

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 1);
        assert_eq!(state.chat.messages[0].text, "Hello AI");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut app = app_with_input("");

        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        assert!(!state.chat.loading);
    }

    #[test]
    fn test_whitespace_only_input_is_rejected() {
        let mut app = app_with_input("   \t\n  ");

        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        assert!(!state.chat.loading);
    }

    #[test]
    fn test_submit_rejected_while_request_in_flight() {
        let mut app = app_with_input("second message");
        app.state.write().chat.loading = true;

        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        // Input must stay intact so the user does not lose their text
        assert_eq!(state.chat.message_input, "second message");
    }

    // ========== Response Handling Tests ==========

    #[test]
    fn test_chat_result_success_appends_ai_message() {
        let mut app = app_with_input("Hello AI");
        app.handle_send_click();

        app.handle_event(AppEvent::ChatResult(Ok(ChatResponse {
            response: "Hello human".to_string(),
        })));

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[1].text, "Hello human");
        assert_eq!(state.chat.messages[1].sender, MessageSender::Ai);
        assert!(!state.chat.loading);
        assert!(state.chat.messages[0].id < state.chat.messages[1].id);
    }

    #[test]
    fn test_chat_result_error_appends_fallback_reply() {
        let mut app = app_with_input("Hello AI");
        app.handle_send_click();

        app.handle_event(AppEvent::ChatResult(Err(AppError::Api(
            "Network error: connection refused".to_string(),
        ))));

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[1].text, FALLBACK_REPLY);
        assert_eq!(state.chat.messages[1].sender, MessageSender::Ai);
        assert!(!state.chat.loading);
    }

    #[test]
    fn test_chat_result_clears_loading_and_allows_next_send() {
        let mut app = app_with_input("first");
        app.handle_send_click();
        app.handle_event(AppEvent::ChatResult(Err(AppError::Api(
            "timeout".to_string(),
        ))));

        app.state.write().chat.message_input = "second".to_string();
        app.handle_send_click();

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 3);
        assert_eq!(state.chat.messages[2].text, "second");
        assert_eq!(state.chat.messages[2].sender, MessageSender::User);
    }

    // ========== Ordering Tests ==========

    #[test]
    fn test_message_sequence_ordering_is_stable() {
        let mut app = App::new();

        for round in 0..3 {
            app.state.write().chat.message_input = format!("question {}", round);
            app.handle_send_click();
            app.handle_event(AppEvent::ChatResult(Ok(ChatResponse {
                response: format!("answer {}", round),
            })));
        }

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 6);

        // Strict alternation in causal order with strictly increasing ids
        for (i, message) in state.chat.messages.iter().enumerate() {
            let expected = if i % 2 == 0 {
                MessageSender::User
            } else {
                MessageSender::Ai
            };
            assert_eq!(message.sender, expected);
        }
        for pair in state.chat.messages.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}
