//! Page service for composing localized pages.
//!
//! This module provides the `PageService`, which loads a page for a locale and
//! turns it into a renderable `PageDto`. Pages missing in the visitor's
//! language fall back to the default language; when nothing can be loaded the
//! visitor still gets an empty page with working navigation.

use dioxus_logger::tracing;

use crate::{
    model::{page::PageDto, slug::base_slug},
    server::{
        data::{client::ContentClient, page::PageRepository},
        error::content::ContentError,
        model::page::{empty_page, PageDocument},
        service::locale::{LocaleCache, LocaleService},
    },
};

pub struct PageService<'a> {
    content: &'a ContentClient,
    locales: &'a LocaleCache,
}

impl<'a> PageService<'a> {
    pub fn new(content: &'a ContentClient, locales: &'a LocaleCache) -> Self {
        Self { content, locales }
    }

    /// Loads the page `slug` for the visitor's locale.
    ///
    /// The requested locale is resolved against the active locales while the
    /// page for it is fetched. A page missing in a non-default locale is
    /// replaced by the default locale's page, still linked under the visitor's
    /// locale. Missing pages and store failures produce an empty page.
    ///
    /// # Arguments
    /// - `slug` - Page slug, bare (`home`) or per-locale (`home-en`)
    /// - `requested` - Locale code the visitor asked for, if any
    ///
    /// # Returns
    /// - `PageDto` - Composed page, possibly without sections
    pub async fn get(&self, slug: &str, requested: Option<&str>) -> PageDto {
        let locale_service = LocaleService::new(self.content, self.locales);
        let repo = PageRepository::new(self.content);

        let (settings, prefetched) = match requested {
            Some(code) => {
                let base = base_slug(slug, code);
                let (settings, page) =
                    tokio::join!(locale_service.settings(), repo.find_by_slug(base, code));
                (settings, Some(page))
            }
            None => (locale_service.settings().await, None),
        };

        let locale = settings.resolve(requested).to_string();
        let slug = base_slug(slug, &locale).to_string();

        let page = match prefetched {
            Some(page) if requested == Some(locale.as_str()) => page,
            _ => repo.find_by_slug(&slug, &locale).await,
        };

        match self.resolve_page(page, &slug, &locale, &settings.default_locale).await {
            Some(document) => document.into_dto(&locale, &slug),
            None => empty_page(&locale, &slug),
        }
    }

    /// Applies the default-locale fallback to a fetched page.
    async fn resolve_page(
        &self,
        page: Result<Option<PageDocument>, ContentError>,
        slug: &str,
        locale: &str,
        default_locale: &str,
    ) -> Option<PageDocument> {
        match page {
            Ok(Some(document)) => Some(document),
            Ok(None) if locale != default_locale => {
                tracing::info!(
                    "Page '{}' not found for locale '{}', falling back to '{}'",
                    slug,
                    locale,
                    default_locale
                );

                match PageRepository::new(self.content)
                    .find_by_slug(slug, default_locale)
                    .await
                {
                    Ok(Some(document)) => Some(document),
                    Ok(None) => {
                        tracing::warn!(
                            "Page '{}' not found in default locale '{}'",
                            slug,
                            default_locale
                        );
                        None
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch page '{}' ({}): {}", slug, default_locale, e);
                        None
                    }
                }
            }
            Ok(None) => {
                tracing::warn!("Page '{}' not found for locale '{}'", slug, locale);
                None
            }
            Err(e) => {
                tracing::error!("Failed to fetch page '{}' ({}): {}", slug, locale, e);
                None
            }
        }
    }
}
