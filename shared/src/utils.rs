//! # Shared Utility Functions
//!
//! Common utility functions used across the client.
//!
//! ## Message Previews
//!
//! [`truncate_preview`] shortens message text for structured log fields so
//! full conversation content never lands in the logs.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_preview;
//!
//! let text = "What is on my schedule for tomorrow afternoon?";
//! assert_eq!(truncate_preview(text, 20), "What is on my schedu...");
//! ```

/// Truncate message text to `max_chars` characters for display or logging.
///
/// If the text fits within `max_chars`, it is returned as-is. Truncation is
/// character-based, not byte-based, so multi-byte text never splits a
/// codepoint.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_chars).collect();
    format!("{}...", prefix)
}
