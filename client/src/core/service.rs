//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::chat::ChatResponse;

use super::error::Result;

/// Trait for the chat API service.
///
/// This trait allows for dependency injection and mocking in tests: the
/// orchestrator's network task takes an `Arc<dyn ChatService>`, so tests can
/// substitute a canned implementation for the real HTTP client.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send a chat message and return the AI-generated reply.
    async fn send_message(&self, message: &str, user_id: Option<i64>) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct CannedChatService {
        reply: String,
    }

    #[async_trait]
    impl ChatService for CannedChatService {
        async fn send_message(&self, _message: &str, _user_id: Option<i64>) -> Result<ChatResponse> {
            Ok(ChatResponse {
                response: self.reply.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_chat_service_trait_object() {
        let service: Arc<dyn ChatService> = Arc::new(CannedChatService {
            reply: "pong".to_string(),
        });

        let response = service
            .send_message("ping", Some(1))
            .await
            .expect("canned service should succeed");
        assert_eq!(response.response, "pong");
    }
}
