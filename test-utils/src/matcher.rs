//! Request matchers for GROQ queries.
//!
//! Content queries are plain `GET` requests with the GROQ text in the `query`
//! parameter and each named parameter JSON-encoded under `$name`. These
//! matchers let mocks target a query by a distinctive fragment and by the
//! values of its parameters.

use serde_json::Value;
use wiremock::{Match, Request};

/// Matches requests whose GROQ text contains a fragment.
pub struct QueryContains(pub String);

impl Match for QueryContains {
    fn matches(&self, request: &Request) -> bool {
        request
            .url
            .query_pairs()
            .any(|(key, value)| key == "query" && value.contains(&self.0))
    }
}

/// Matches requests whose `$name` parameter decodes to `value`.
pub struct GroqParam {
    name: String,
    value: Value,
}

impl Match for GroqParam {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().any(|(key, raw)| {
            key.strip_prefix('$') == Some(self.name.as_str())
                && serde_json::from_str::<Value>(&raw).is_ok_and(|v| v == self.value)
        })
    }
}

/// Shorthand for [`QueryContains`].
pub fn query_contains(fragment: impl Into<String>) -> QueryContains {
    QueryContains(fragment.into())
}

/// Shorthand for [`GroqParam`].
///
/// # Example
///
/// ```rust,ignore
/// Mock::given(query_contains("_type == \"page\""))
///     .and(groq_param("locale", "en"))
///     .respond_with(ResponseTemplate::new(200));
/// ```
pub fn groq_param(name: impl Into<String>, value: impl Into<Value>) -> GroqParam {
    GroqParam {
        name: name.into(),
        value: value.into(),
    }
}

/// Extracts the GROQ text of a recorded request.
pub fn query_text(request: &Request) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
}
