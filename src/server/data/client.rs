use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use url::Url;

use crate::server::{config::Config, error::content::ContentError};

/// Read-only client for the content store's GROQ query endpoint.
///
/// Queries are sent as `GET {base}/v{version}/data/query/{dataset}` with the
/// GROQ text in `query` and every parameter as a JSON-encoded `$name` pair.
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    query_url: Url,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl ContentClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Result<Self, ContentError> {
        Self::with_base_url(
            http,
            &config.sanity_base_url(),
            &config.sanity_api_version,
            &config.sanity_dataset,
            config.sanity_token.clone(),
        )
    }

    /// Builds a client against an explicit API host.
    ///
    /// # Arguments
    /// - `base_url` - Host such as `https://abc123.api.sanity.io`
    /// - `api_version` - Dated API version, with or without the leading `v`
    /// - `dataset` - Dataset name
    /// - `token` - Optional read token for private datasets
    pub fn with_base_url(
        http: reqwest::Client,
        base_url: &str,
        api_version: &str,
        dataset: &str,
        token: Option<String>,
    ) -> Result<Self, ContentError> {
        let version = api_version.trim_start_matches('v');
        let query_url = Url::parse(&format!(
            "{}/v{}/data/query/{}",
            base_url.trim_end_matches('/'),
            version,
            dataset
        ))?;

        Ok(Self {
            http,
            query_url,
            token,
        })
    }

    /// Runs a GROQ query and decodes its `result`.
    ///
    /// # Arguments
    /// - `query` - GROQ query text
    /// - `params` - Named parameters referenced as `$name` in the query
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded query result
    /// - `Err(ContentError::Request)` - Network failure or unreadable body
    /// - `Err(ContentError::Status)` - Non-success response from the store
    /// - `Err(ContentError::Decode)` - Result did not match `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<T, ContentError> {
        let mut url = self.query_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(&format!("${}", name), &value.to_string());
            }
        }

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Content query failed with {}: {}", status, body);
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: QueryResponse<T> = serde_json::from_slice(&bytes)?;

        Ok(envelope.result)
    }
}
