use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, contact::ContactRequestDto},
    server::{error::AppError, service::contact::ContactService, state::AppState},
};

pub static CONTACT_TAG: &str = "contact";

/// Submits a consultation request.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and webhook URL
/// - `payload` - Contact form fields
///
/// # Returns
/// - `202 Accepted` - Request validated and delivered
/// - `400 Bad Request` - One or more fields are invalid; `details` lists them
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Webhook delivery failed
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = ContactRequestDto,
    responses(
        (status = 202, description = "Request accepted"),
        (status = 400, description = "Invalid form fields", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    ContactService::new(&state.http_client, state.contact_webhook_url.as_deref())
        .submit(payload)
        .await?;

    Ok(StatusCode::ACCEPTED)
}
