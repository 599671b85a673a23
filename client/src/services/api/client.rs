//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::Client;

use crate::core::service::ChatService;
use crate::core::Result;

/// Default base URL for the backend API server
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL
const API_URL_ENV: &str = "CHAT_API_URL";

/// HTTP client for communicating with the backend API server.
///
/// This client handles all REST API calls and maintains a connection pool.
/// The base URL is resolved once at construction from the `CHAT_API_URL`
/// environment variable, falling back to the local development address.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new() -> Self {
        Self::with_base_url(resolve_base_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Create a client pointed at an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the backend base URL from an optional environment override.
///
/// Trailing slashes are stripped so endpoint paths can always be joined
/// with a leading slash.
fn resolve_base_url(env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

// Implement ChatService trait for ApiClient
#[async_trait]
impl ChatService for ApiClient {
    async fn send_message(
        &self,
        message: &str,
        user_id: Option<i64>,
    ) -> Result<shared::dto::chat::ChatResponse> {
        crate::services::api::chat::send_message(self, message, user_id).await
    }
}
