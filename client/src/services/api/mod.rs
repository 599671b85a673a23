//! # Backend API Client Module
//!
//! HTTP client for communicating with the Greenstein backend API server.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! └── chat.rs     - Chat endpoint (POST /api/v1/chat/)
//! ```

pub mod chat;
pub mod client;

pub use client::ApiClient;
