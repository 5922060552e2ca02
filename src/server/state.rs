//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources the
//! API handlers and the locale middleware need. The state is initialized once during
//! startup and then cloned for each request through Axum's state extraction.

use crate::server::{data::client::ContentClient, service::locale::LocaleCache};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `ContentClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `LocaleCache` shares its entry through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Read client for the content store.
    pub content: ContentClient,

    /// Locale settings cache shared by the middleware and the API.
    pub locale_cache: LocaleCache,

    /// HTTP client for outgoing calls other than content queries, such as the
    /// contact webhook.
    pub http_client: reqwest::Client,

    /// Endpoint contact requests are forwarded to, if configured.
    pub contact_webhook_url: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `content` - Content store client
    /// - `locale_cache` - Locale settings cache
    /// - `http_client` - HTTP client for outgoing requests
    /// - `contact_webhook_url` - Optional contact webhook endpoint
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        content: ContentClient,
        locale_cache: LocaleCache,
        http_client: reqwest::Client,
        contact_webhook_url: Option<String>,
    ) -> Self {
        Self {
            content,
            locale_cache,
            http_client,
            contact_webhook_url,
        }
    }
}
