use std::time::Duration;

use crate::server::{
    config::Config, data::client::ContentClient, error::AppError, service::locale::LocaleCache,
};

const HTTP_TIMEOUT_SECS: u64 = 10;

/// Builds the HTTP client shared by content queries and the contact webhook.
///
/// Redirects are not followed so a misconfigured URL cannot bounce requests
/// to arbitrary hosts.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}

/// Builds the content store client from configuration.
///
/// # Returns
/// - `Ok(ContentClient)` - Client for the configured project and dataset
/// - `Err(AppError::ContentErr)` - The API URL could not be built
pub fn setup_content_client(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<ContentClient, AppError> {
    Ok(ContentClient::new(http_client, config)?)
}

pub fn setup_locale_cache(config: &Config) -> LocaleCache {
    LocaleCache::new(config.locale_cache_ttl, config.default_locale.clone())
}
