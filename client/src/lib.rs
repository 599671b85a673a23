//! # Greenstein Chat Client - Library Root
//!
//! A **native desktop GUI** for chatting with the Greenstein AI assistant.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              greenstein-client (this crate)            │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────────────┐
//! │  Greenstein backend     │
//! │  POST /api/v1/chat/     │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and orchestration
//!   - Owns the message list and loading flag
//!   - Event-driven: async task results arrive as [`AppEvent`]s over a channel
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client (chat endpoint)
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen rendering (the chat view)
//!   - `widgets`: Custom UI components (message bubbles, layout helpers)
//!   - `theme`: Color palette and styling
//!
//! - **utils**: Utility functions
//!   - `runtime`: Tokio runtime helpers
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses an **async channel** for communication:
//! - Main thread: handles input and rendering (single-threaded, egui)
//! - Async tasks: network requests (Tokio runtime)
//!
//! Results flow from async tasks back to the main thread via the [`AppEvent`]
//! enum and are drained every frame in `App::on_tick`.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: multiple readers, exclusive writers
//! - **Shared**: accessible from async tasks
//! - **Locked briefly**: minimize contention, drop locks immediately
//!
//! The message sequence is append-only and only ever mutated by the
//! orchestrator; while a request is in flight the input is disabled, so at
//! most one request is ever pending.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, Result};
