use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, locale::LocalesDto},
    server::{error::AppError, service::locale::LocaleService, state::AppState},
};

pub static LOCALE_TAG: &str = "locale";

/// Lists the locales the site is served in.
///
/// Falls back to cached or configured locales when the content store is
/// unavailable, so this endpoint does not fail on store outages.
///
/// # Arguments
/// - `state` - Application state containing the content client and locale cache
///
/// # Returns
/// - `200 OK` - Active locales, default first
#[utoipa::path(
    get,
    path = "/api/locales",
    tag = LOCALE_TAG,
    responses(
        (status = 200, description = "Active locales", body = LocalesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locales(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = LocaleService::new(&state.content, &state.locale_cache)
        .settings()
        .await;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
