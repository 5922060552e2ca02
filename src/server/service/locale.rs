//! Locale settings service with an in-memory cache.
//!
//! This module provides `LocaleCache`, shared through the application state, and
//! `LocaleService`, which answers "which locales does the site serve and which
//! one is the default" for every request. Settings are fetched from the content
//! store at most once per TTL. When the store is unreachable the last known
//! settings are served, and without any the site runs in the configured default
//! locale alone.

use dioxus_logger::tracing;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::{
    data::{client::ContentClient, locale::LocaleRepository},
    model::locale::LocaleSettings,
};

/// Locale settings with the time they were fetched.
#[derive(Clone)]
struct CachedSettings {
    settings: LocaleSettings,
    fetched_at: Instant,
}

/// Shared cache of the site's locale settings.
///
/// Cloning shares the same underlying entry. The entry is never evicted; once
/// older than the TTL it is refreshed on the next lookup and kept as a stale
/// fallback if the refresh fails.
#[derive(Clone)]
pub struct LocaleCache {
    entry: Arc<RwLock<Option<CachedSettings>>>,
    ttl: Duration,
    default_locale: String,
}

impl LocaleCache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `ttl` - How long fetched settings are served without refetching
    /// - `default_locale` - Configured default, used when the store has no usable locales
    pub fn new(ttl: Duration, default_locale: impl Into<String>) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            ttl,
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Cached settings if they are younger than the TTL.
    async fn fresh(&self) -> Option<LocaleSettings> {
        self.entry
            .read()
            .await
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.settings.clone())
    }

    /// Cached settings regardless of age.
    async fn stale(&self) -> Option<LocaleSettings> {
        self.entry
            .read()
            .await
            .as_ref()
            .map(|cached| cached.settings.clone())
    }

    async fn store(&self, settings: LocaleSettings) {
        *self.entry.write().await = Some(CachedSettings {
            settings,
            fetched_at: Instant::now(),
        });
    }

    /// Drops the cached entry.
    #[cfg(test)]
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}

pub struct LocaleService<'a> {
    content: &'a ContentClient,
    cache: &'a LocaleCache,
}

impl<'a> LocaleService<'a> {
    pub fn new(content: &'a ContentClient, cache: &'a LocaleCache) -> Self {
        Self { content, cache }
    }

    /// Current locale settings.
    ///
    /// Serves the cache while fresh, otherwise fetches locale documents from the
    /// content store and caches the result. A failed fetch falls back to the
    /// stale cache entry, then to settings holding only the configured default
    /// locale. Never fails.
    ///
    /// # Returns
    /// - `LocaleSettings` - Active locales and the default locale
    pub async fn settings(&self) -> LocaleSettings {
        if let Some(settings) = self.cache.fresh().await {
            return settings;
        }

        match LocaleRepository::new(self.content).get_all().await {
            Ok(documents) => {
                let settings =
                    LocaleSettings::from_documents(documents, self.cache.default_locale());
                tracing::debug!(
                    "Loaded locales {:?}, default '{}'",
                    settings.codes(),
                    settings.default_locale
                );
                self.cache.store(settings.clone()).await;
                settings
            }
            Err(e) => match self.cache.stale().await {
                Some(settings) => {
                    tracing::warn!("Failed to refresh locales, serving cached settings: {}", e);
                    settings
                }
                None => {
                    tracing::warn!(
                        "Failed to load locales, falling back to '{}': {}",
                        self.cache.default_locale(),
                        e
                    );
                    LocaleSettings::fallback(self.cache.default_locale())
                }
            },
        }
    }

    /// Resolves a requested locale code against the active locales.
    ///
    /// # Arguments
    /// - `requested` - Locale code from the URL or query string, if any
    ///
    /// # Returns
    /// - `String` - `requested` when it is active, otherwise the default locale
    pub async fn resolve(&self, requested: Option<&str>) -> String {
        self.settings().await.resolve(requested).to_string()
    }
}
