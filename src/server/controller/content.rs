use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, content::ContentStatusDto},
    server::{error::AppError, service::content::ContentStatusService, state::AppState},
};

pub static CONTENT_TAG: &str = "content";

/// Reports the pages in the content store and locales missing a home page.
///
/// # Returns
/// - `200 OK` - Content status
/// - `500 Internal Server Error` - Content store unavailable
#[utoipa::path(
    get,
    path = "/api/content/status",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Content status", body = ContentStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_content_status(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let status = ContentStatusService::new(&state.content, state.locale_cache.default_locale())
        .status()
        .await?;

    Ok((StatusCode::OK, Json(status)))
}
