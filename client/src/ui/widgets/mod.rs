//! # Reusable UI Widgets
//!
//! Common widgets used by the chat screen.

pub mod bubbles;
pub mod layouts;
