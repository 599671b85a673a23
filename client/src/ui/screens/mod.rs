//! # Screen Modules
//!
//! Screen rendering logic. The application has a single screen:
//!
//! - **[`chat`]**: the chat view (message list, input row, thinking
//!   indicator)
//!
//! ## Rendering Pattern
//!
//! Screens are pure functions of state: they read from `AppState` (lock
//! held briefly), render, and route user actions back through the `App`
//! handlers. State mutation never happens in rendering code beyond the
//! input text buffer.

pub mod chat;
