//! # Common Error Types
//!
//! Consolidated error handling for the chat client.
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **State**: Application state management errors
//! - **Validation**: Input validation errors (empty message, etc.)
//!
//! At the orchestrator boundary every failure collapses into a single
//! user-visible fallback message; these variants exist for logging and for
//! the service layer's `Result` signatures.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Used for errors during HTTP requests to the backend:
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors (4xx client errors, 5xx server errors)
    /// - JSON parsing errors (malformed responses)
    #[error("API error: {0}")]
    Api(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// The only validation this client performs is non-empty trimming of
    /// the message input.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
