//! # Chat Endpoint
//!
//! Handles the chat round trip with the backend AI service.

use shared::dto::chat::{ChatRequest, ChatResponse, ErrorResponse};

use super::client::ApiClient;
use crate::core::{AppError, Result};

/// Build the chat endpoint URL for a given base URL.
fn chat_endpoint(base_url: &str) -> String {
    format!("{}/api/v1/chat/", base_url)
}

/// Send a chat message and return the AI-generated reply.
///
/// Any failure (transport error, non-2xx status, malformed body) is
/// returned as an [`AppError::Api`]; the orchestrator decides what the
/// user sees.
#[tracing::instrument(skip(client, message), fields(message_length = message.len()))]
pub async fn send_message(
    client: &ApiClient,
    message: &str,
    user_id: Option<i64>,
) -> Result<ChatResponse> {
    tracing::info!("Sending chat message");
    let start = std::time::Instant::now();

    let request = ChatRequest {
        message: message.to_string(),
        user_id,
    };

    let response = client
        .client
        .post(chat_endpoint(client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let chat_response = response.json::<ChatResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Chat response parse error");
            format!("Failed to parse response: {}", e)
        })?;

        tracing::info!(
            duration_ms = duration.as_millis() as u64,
            response_length = chat_response.response.len(),
            "Chat response received"
        );
        Ok(chat_response)
    } else {
        // FastAPI error bodies carry a "detail" field; fall back to the
        // bare status when the body is missing or malformed
        let detail = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.detail)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));

        tracing::warn!(
            status = status.as_u16(),
            error = %detail,
            duration_ms = duration.as_millis() as u64,
            "Chat request failed"
        );
        Err(AppError::Api(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_endpoint_join() {
        assert_eq!(
            chat_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/v1/chat/"
        );
    }
}
