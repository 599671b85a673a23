//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the chat client and the
//! Greenstein backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat request/response DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_preview`]**: Truncate message text for log output
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::chat::{ChatRequest, ChatResponse};
//!
//! let request = ChatRequest {
//!     message: "Hello there".to_string(),
//!     user_id: Some(1),
//! };
//!
//! let response: ChatResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/v1/chat/")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
