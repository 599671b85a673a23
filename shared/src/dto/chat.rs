//! # Chat Data Transfer Objects
//!
//! Defines request and response structures for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Chat request sent to the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Chat response (AI-generated reply)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Error response body (FastAPI convention: `{"detail": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}
