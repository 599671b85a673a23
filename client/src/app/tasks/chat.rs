//! # Chat Network Task
//!
//! Executes the chat round trip off the UI thread.

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::app::handlers::chat::DEFAULT_USER_ID;
use crate::core::service::ChatService;
use crate::utils::runtime::TOKIO_RT;

/// Send a chat message on the Tokio runtime.
///
/// The result, success or failure, is delivered back to the main thread as
/// an [`AppEvent::ChatResult`]; no error escapes the task.
pub fn send_chat_message(
    service: Arc<dyn ChatService>,
    event_tx: Sender<AppEvent>,
    text: String,
) {
    TOKIO_RT.spawn(async move {
        let result = service.send_message(&text, Some(DEFAULT_USER_ID)).await;

        if let Err(e) = &result {
            tracing::error!(error = %e, "Chat request failed");
        }

        if event_tx.send(AppEvent::ChatResult(result)).await.is_err() {
            tracing::warn!("Event channel closed - dropping chat result");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::dto::chat::ChatResponse;

    use crate::core::AppError;

    struct CannedChatService {
        reply: Result<String, String>,
    }

    #[async_trait]
    impl ChatService for CannedChatService {
        async fn send_message(
            &self,
            _message: &str,
            _user_id: Option<i64>,
        ) -> crate::core::Result<ChatResponse> {
            self.reply
                .clone()
                .map(|response| ChatResponse { response })
                .map_err(AppError::Api)
        }
    }

    #[test]
    fn test_send_chat_message_delivers_success_event() {
        let (event_tx, event_rx) = async_channel::unbounded();
        let service: Arc<dyn ChatService> = Arc::new(CannedChatService {
            reply: Ok("Hello human".to_string()),
        });

        send_chat_message(service, event_tx, "Hello AI".to_string());

        let event = event_rx.recv_blocking().expect("event should arrive");
        match event {
            AppEvent::ChatResult(Ok(response)) => {
                assert_eq!(response.response, "Hello human");
            }
            other => panic!("Expected successful ChatResult, got {:?}", other),
        }
    }

    #[test]
    fn test_send_chat_message_delivers_error_event() {
        let (event_tx, event_rx) = async_channel::unbounded();
        let service: Arc<dyn ChatService> = Arc::new(CannedChatService {
            reply: Err("Network error: connection refused".to_string()),
        });

        send_chat_message(service, event_tx, "Hello AI".to_string());

        let event = event_rx.recv_blocking().expect("event should arrive");
        match event {
            AppEvent::ChatResult(Err(error)) => {
                assert!(error.to_string().contains("connection refused"));
            }
            other => panic!("Expected failed ChatResult, got {:?}", other),
        }
    }
}
