use thiserror::Error;

/// Failures talking to the content store.
///
/// Services catch these and fall back to safe defaults (an empty page, an
/// empty post list, the configured default locale) so a CMS outage degrades
/// the site instead of breaking it. They only surface as HTTP errors through
/// [`AppError`](crate::server::error::AppError) on diagnostic endpoints.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The query request could not be sent or its body could not be read.
    #[error("Content store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The content store answered with a non-success status.
    #[error("Content store returned {status}: {body}")]
    Status {
        /// HTTP status code returned by the content store
        status: u16,
        /// Response body, usually a JSON error description
        body: String,
    },

    /// The query result did not match the expected document shape.
    #[error("Failed to decode content store result: {0}")]
    Decode(#[from] serde_json::Error),

    /// A query URL could not be built from the configured base URL.
    #[error("Invalid content store URL: {0}")]
    Url(#[from] url::ParseError),
}
