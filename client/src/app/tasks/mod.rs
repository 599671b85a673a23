//! # Async Background Tasks
//!
//! Tasks run on the global Tokio runtime and report results back to the main
//! thread as [`crate::app::AppEvent`]s over the app's event channel.

pub mod chat;
