//! # Data Transfer Objects (DTOs)
//!
//! Data structures used for communication between the client and the
//! Greenstein backend via the REST API.
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/chat/
//! Content-Type: application/json
//!
//! {
//!   "message": "What is on my schedule today?",
//!   "user_id": 1
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "response": "You have two meetings this afternoon."
//! }
//! ```

pub mod chat;

pub use chat::*;
