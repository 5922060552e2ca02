use serde_json::Value;
use wiremock::MockServer;

use crate::{error::TestError, matcher::query_text};

/// Running mock content store.
///
/// Holds the `wiremock` server for the lifetime of a test. The server shuts
/// down when the context is dropped.
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    /// Starts an empty mock content store.
    ///
    /// Without registered mocks every request answers 404; use
    /// `TestBuilder` to get the store's `null` fallback and fixtures.
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to point a content client at, e.g. `http://127.0.0.1:41234`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Counts received queries whose GROQ text contains `fragment`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of matching requests
    /// - `Err(TestError::RecordingDisabled)` - Server does not record requests
    pub async fn query_count(&self, fragment: &str) -> Result<usize, TestError> {
        let requests = self
            .server
            .received_requests()
            .await
            .ok_or(TestError::RecordingDisabled)?;

        Ok(requests
            .iter()
            .filter_map(query_text)
            .filter(|query| query.contains(fragment))
            .count())
    }

    /// Decoded values of the `$name` parameter across all received queries,
    /// in request order.
    ///
    /// # Returns
    /// - `Ok(Vec<Value>)` - One entry per request carrying the parameter
    /// - `Err(TestError::InvalidParam)` - A parameter value was not valid JSON
    /// - `Err(TestError::RecordingDisabled)` - Server does not record requests
    pub async fn param_values(&self, name: &str) -> Result<Vec<Value>, TestError> {
        let requests = self
            .server
            .received_requests()
            .await
            .ok_or(TestError::RecordingDisabled)?;

        let key = format!("${}", name);
        let mut values = Vec::new();
        for request in &requests {
            for (param, raw) in request.url.query_pairs() {
                if param == key {
                    let value = serde_json::from_str(&raw).map_err(|source| {
                        TestError::InvalidParam {
                            name: name.to_string(),
                            source,
                        }
                    })?;
                    values.push(value);
                }
            }
        }

        Ok(values)
    }
}
