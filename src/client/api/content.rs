//! Server functions loading page content.
//!
//! While the server renders a page these run in-process, so the HTML sent to
//! the browser already holds the content and meta tags. After hydration the
//! client calls them over HTTP.

use dioxus::prelude::*;

use crate::model::{
    blog::{BlogPostDto, BlogPostSummaryDto},
    locale::LocalesDto,
    page::PageDto,
};

#[cfg(feature = "server")]
use crate::server::{service::view::ViewService, state::AppState};

#[server]
pub async fn load_locales() -> Result<LocalesDto, ServerFnError> {
    let state = app_state().await?;
    Ok(ViewService::new(&state).locales().await)
}

#[server]
pub async fn load_page(slug: String, locale: String) -> Result<PageDto, ServerFnError> {
    let state = app_state().await?;
    Ok(ViewService::new(&state).page(&slug, &locale).await)
}

#[server]
pub async fn load_posts(
    locale: String,
    limit: Option<usize>,
) -> Result<Vec<BlogPostSummaryDto>, ServerFnError> {
    let state = app_state().await?;
    Ok(ViewService::new(&state).posts(&locale, limit).await)
}

#[server]
pub async fn load_post(slug: String, locale: String) -> Result<Option<BlogPostDto>, ServerFnError> {
    let state = app_state().await?;
    Ok(ViewService::new(&state).post(&slug, &locale).await)
}

/// Shared state, provided to server functions as an axum extension.
#[cfg(feature = "server")]
async fn app_state() -> Result<AppState, ServerFnError> {
    let axum::Extension(state) =
        dioxus::fullstack::FullstackContext::extract::<axum::Extension<AppState>, _>().await?;
    Ok(state)
}
