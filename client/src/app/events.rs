//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread.

use shared::dto::chat::ChatResponse;

use crate::core::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Chat round trip completed (AI reply or error)
    ChatResult(Result<ChatResponse, AppError>),
}
