//! Data for server-rendered pages.
//!
//! Page components load their content through server functions so the first
//! HTML response already carries sections, articles and meta tags. This
//! service backs those functions with the same services the JSON API uses.

use crate::{
    model::{
        blog::{BlogPostDto, BlogPostSummaryDto},
        locale::LocalesDto,
        page::PageDto,
    },
    server::{
        service::{blog::BlogService, locale::LocaleService, page::PageService},
        state::AppState,
    },
};

pub struct ViewService<'a> {
    state: &'a AppState,
}

impl<'a> ViewService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Active locales for the language switch.
    pub async fn locales(&self) -> LocalesDto {
        self.locale_service().settings().await.into_dto()
    }

    /// Composed page `slug` for the locale in the URL.
    pub async fn page(&self, slug: &str, locale: &str) -> PageDto {
        PageService::new(&self.state.content, &self.state.locale_cache)
            .get(slug, Some(locale))
            .await
    }

    /// Post summaries for the locale in the URL, newest first.
    pub async fn posts(&self, locale: &str, limit: Option<usize>) -> Vec<BlogPostSummaryDto> {
        let locale = self.locale_service().resolve(Some(locale)).await;

        BlogService::new(&self.state.content)
            .list(&locale, limit, false)
            .await
    }

    /// A single post for the locale in the URL, `None` when there is no
    /// post with this slug.
    pub async fn post(&self, slug: &str, locale: &str) -> Option<BlogPostDto> {
        let locale = self.locale_service().resolve(Some(locale)).await;

        BlogService::new(&self.state.content)
            .get(slug, &locale)
            .await
            .ok()
    }

    fn locale_service(&self) -> LocaleService<'a> {
        LocaleService::new(&self.state.content, &self.state.locale_cache)
    }
}
