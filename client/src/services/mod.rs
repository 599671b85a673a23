//! # Services Module
//!
//! External service integrations for the Greenstein chat client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/        - Backend HTTP API client
//!                   (chat endpoint)
//! ```
//!
//! The client talks to exactly one external system: the Greenstein backend,
//! over HTTP/JSON. See [`api`] for the client and endpoint functions.

pub mod api;
