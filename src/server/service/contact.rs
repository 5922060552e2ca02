//! Contact service for handling consultation requests.
//!
//! Submissions are validated, logged and, when a webhook is configured,
//! forwarded to it as JSON so the clinic's tooling can pick them up.

use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    model::contact::ContactRequestDto,
    server::{error::AppError, model::contact::ContactInquiry},
};

/// Payload posted to the contact webhook.
#[derive(Serialize)]
struct WebhookPayload<'a> {
    #[serde(flatten)]
    inquiry: &'a ContactInquiry,
    treatment_labels: Vec<&'a str>,
}

pub struct ContactService<'a> {
    http: &'a reqwest::Client,
    webhook_url: Option<&'a str>,
}

impl<'a> ContactService<'a> {
    pub fn new(http: &'a reqwest::Client, webhook_url: Option<&'a str>) -> Self {
        Self { http, webhook_url }
    }

    /// Validates and delivers a contact form submission.
    ///
    /// # Arguments
    /// - `request` - Form fields as submitted
    ///
    /// # Returns
    /// - `Ok(ContactInquiry)` - The accepted, trimmed inquiry
    /// - `Err(AppError::Validation)` - One entry per invalid field
    /// - `Err(AppError::ReqwestErr)` - Webhook unreachable or rejected the inquiry
    pub async fn submit(&self, request: ContactRequestDto) -> Result<ContactInquiry, AppError> {
        let inquiry = ContactInquiry::from_dto(request);

        let errors = inquiry.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        tracing::info!(
            "Contact request from {} <{}> ({}), treatments: {:?}",
            inquiry.name,
            inquiry.email,
            inquiry.country.as_deref().unwrap_or("unknown country"),
            inquiry.treatment_labels()
        );

        if let Some(url) = self.webhook_url {
            let payload = WebhookPayload {
                inquiry: &inquiry,
                treatment_labels: inquiry.treatment_labels(),
            };

            self.http
                .post(url)
                .json(&payload)
                .send()
                .await?
                .error_for_status()?;

            tracing::debug!("Forwarded contact request from {} to webhook", inquiry.email);
        }

        Ok(inquiry)
    }
}
