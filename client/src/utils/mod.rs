//! # Utility Functions
//!
//! Shared utility functions used across the client application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Tokio runtime helpers
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (message previews)

pub mod runtime;
