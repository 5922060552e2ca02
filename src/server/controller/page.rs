use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, page::PageDto},
    server::{error::AppError, service::page::PageService, state::AppState},
};

pub static PAGE_TAG: &str = "page";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocaleQuery {
    /// Locale code; the default locale when absent or inactive
    pub locale: Option<String>,
}

/// Gets a composed page for a locale.
///
/// Pages missing in the requested locale fall back to the default locale's
/// page; when no page can be loaded an empty page with the fixed navigation
/// links is returned instead of an error.
///
/// # Arguments
/// - `state` - Application state containing the content client and locale cache
/// - `slug` - Page slug, e.g. `home`
/// - `query` - Optional `locale` code
///
/// # Returns
/// - `200 OK` - Composed page
#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page slug"),
        LocaleQuery
    ),
    responses(
        (status = 200, description = "Composed page", body = PageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.content, &state.locale_cache)
        .get(&slug, query.locale.as_deref())
        .await;

    Ok((StatusCode::OK, Json(page)))
}
