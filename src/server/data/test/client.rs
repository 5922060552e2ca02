use super::*;

use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

/// Tests the query request shape.
///
/// Verifies that queries go to the versioned dataset endpoint with the GROQ
/// text and JSON-encoded `$` parameters, and that the `result` envelope is
/// unwrapped.
///
/// Expected: Ok(result)
#[tokio::test]
async fn sends_query_and_params() -> Result<(), ContentError> {
    let test = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2024-01-01/data/query/production"))
        .and(test_utils::matcher::query_contains("count(*)"))
        .and(test_utils::matcher::groq_param("locale", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 7})))
        .mount(&test.server)
        .await;

    let client = content_client(&test);
    let count: u32 = client.fetch("count(*)", &[("locale", json!("ru"))]).await?;

    assert_eq!(count, 7);

    Ok(())
}

/// Tests that a leading `v` in the API version is not doubled.
///
/// Expected: Ok with request sent to `/v2024-01-01/...`
#[tokio::test]
async fn accepts_prefixed_api_version() -> Result<(), ContentError> {
    let test = TestContext::new().await;
    Mock::given(path("/v2024-01-01/data/query/staging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
        .mount(&test.server)
        .await;

    let client = ContentClient::with_base_url(
        reqwest::Client::new(),
        &format!("{}/", test.uri()),
        "v2024-01-01",
        "staging",
        None,
    )?;
    let result: Option<Value> = client.fetch("*[0]", &[]).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that the read token is sent as a bearer token.
///
/// Expected: Ok with the mock matched on the Authorization header
#[tokio::test]
async fn sends_bearer_token() -> Result<(), ContentError> {
    let test = TestContext::new().await;
    Mock::given(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .mount(&test.server)
        .await;

    let client = ContentClient::with_base_url(
        reqwest::Client::new(),
        &test.uri(),
        "2024-01-01",
        "production",
        Some("secret-token".to_string()),
    )?;
    let result: bool = client.fetch("true", &[]).await?;

    assert!(result);

    Ok(())
}

/// Tests error mapping for non-success responses.
///
/// Expected: Err(ContentError::Status) carrying the status and body
#[tokio::test]
async fn maps_error_status() {
    let test = TestBuilder::new()
        .with_failure("*[", 503)
        .build()
        .await
        .unwrap();

    let result: Result<Value, _> = content_client(&test).fetch("*[0]", &[]).await;

    match result {
        Err(ContentError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("mock failure"));
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

/// Tests error mapping for results that do not match the expected type.
///
/// Expected: Err(ContentError::Decode)
#[tokio::test]
async fn maps_decode_errors() {
    let test = TestContext::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "text"})))
        .mount(&test.server)
        .await;

    let result: Result<Vec<u32>, _> = content_client(&test).fetch("*", &[]).await;

    assert!(matches!(result, Err(ContentError::Decode(_))));
}
