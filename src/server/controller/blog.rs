use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        blog::{BlogPostDto, BlogPostSummaryDto},
    },
    server::{
        controller::page::LocaleQuery,
        error::AppError,
        service::{blog::BlogService, locale::LocaleService},
        state::AppState,
    },
};

pub static BLOG_TAG: &str = "blog";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogListQuery {
    /// Locale code; the default locale when absent or inactive
    pub locale: Option<String>,
    /// Maximum number of posts
    pub limit: Option<usize>,
    /// Only featured posts, at most three
    #[serde(default)]
    pub featured: bool,
}

/// Lists blog posts for a locale, newest first.
///
/// # Arguments
/// - `state` - Application state containing the content client
/// - `query` - Locale, limit and featured filter
///
/// # Returns
/// - `200 OK` - Post summaries, empty when the store is unavailable
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = BLOG_TAG,
    params(BlogListQuery),
    responses(
        (status = 200, description = "Post summaries", body = Vec<BlogPostSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let locale = LocaleService::new(&state.content, &state.locale_cache)
        .resolve(query.locale.as_deref())
        .await;

    let posts = BlogService::new(&state.content)
        .list(&locale, query.limit, query.featured)
        .await;

    Ok((StatusCode::OK, Json(posts)))
}

/// Gets a single blog post by slug.
///
/// # Arguments
/// - `state` - Application state containing the content client
/// - `slug` - Public post slug
/// - `query` - Optional `locale` code
///
/// # Returns
/// - `200 OK` - Full post
/// - `404 Not Found` - No post with that slug in the locale
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = BLOG_TAG,
    params(
        ("slug" = String, Path, description = "Post slug"),
        LocaleQuery
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let locale = LocaleService::new(&state.content, &state.locale_cache)
        .resolve(query.locale.as_deref())
        .await;

    let post = BlogService::new(&state.content).get(&slug, &locale).await?;

    Ok((StatusCode::OK, Json(post)))
}
