use crate::{client::model::error::ApiError, model::contact::ContactRequestDto};

use super::helper::{parse_empty_response, post, send_request, serialize_json};

/// Submit the consultation form
pub async fn submit_contact(payload: &ContactRequestDto) -> Result<(), ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/contact").body(body)).await?;
    parse_empty_response(response).await
}
