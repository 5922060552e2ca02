use super::*;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{ACCEPT_LANGUAGE, COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, Request, StatusCode,
    },
    middleware::from_fn_with_state,
    response::Response,
    routing::get,
    Router,
};
use tower::ServiceExt;

use crate::server::middleware::locale::{locale_redirect, LOCALE_HEADER};

const LOCALE_QUERY: &str = r#"_type == "locale""#;

/// Answers with the `x-locale` header the middleware put on the request.
async fn echo_locale(headers: HeaderMap) -> String {
    headers
        .get(LOCALE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Page routes plus one API route, wrapped in the locale middleware the way
/// the server mounts it.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/{locale}", get(echo_locale))
        .route("/{locale}/blog", get(echo_locale))
        .route("/api/ping", get(|| async { "pong" }))
        .layer(from_fn_with_state(state, locale_redirect))
}

fn get_request(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Tests redirecting an unlocalized page using `Accept-Language`.
///
/// Expected: 307 to `/ru/blog` with the query kept and the locale cookie set
#[tokio::test]
async fn redirects_unlocalized_page() {
    let test = store_with_locales().await;

    let response = app(app_state(&test))
        .oneshot(get_request(
            "/blog?ref=ad",
            &[(ACCEPT_LANGUAGE.as_str(), "ru-RU,ru;q=0.9,en;q=0.5")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, LOCATION.as_str()), Some("/ru/blog?ref=ad"));
    assert!(header(&response, SET_COOKIE.as_str()).is_some_and(|c| c.starts_with("site_locale=ru;")));
    assert_eq!(header(&response, LOCALE_HEADER), Some("ru"));
}

/// Tests that the locale cookie wins over `Accept-Language` on the root.
///
/// Expected: 307 to `/ru`
#[tokio::test]
async fn redirects_root_to_cookie_locale() {
    let test = store_with_locales().await;

    let response = app(app_state(&test))
        .oneshot(get_request(
            "/",
            &[
                (COOKIE.as_str(), "theme=dark; site_locale=ru"),
                (ACCEPT_LANGUAGE.as_str(), "en-US"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, LOCATION.as_str()), Some("/ru"));
}

/// Tests that a localized page reaches its handler.
///
/// Expected: 200 with `x-locale` on the request and response and the cookie set
#[tokio::test]
async fn passes_localized_page_with_locale_header() {
    let test = store_with_locales().await;

    let response = app(app_state(&test))
        .oneshot(get_request("/ru/blog", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, LOCALE_HEADER), Some("ru"));
    assert!(header(&response, SET_COOKIE.as_str()).is_some_and(|c| c.starts_with("site_locale=ru;")));
    assert_eq!(body_text(response).await, "ru");
}

/// Tests that API paths skip the middleware entirely.
///
/// Expected: handler answers and the store is never asked for locales
#[tokio::test]
async fn bypasses_api_without_locale_lookup() {
    let test = store_with_locales().await;

    let response = app(app_state(&test))
        .oneshot(get_request("/api/ping", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, SET_COOKIE.as_str()).is_none());
    assert_eq!(body_text(response).await, "pong");
    assert_eq!(test.query_count(LOCALE_QUERY).await.unwrap(), 0);
}

/// Tests that locale settings are cached across requests.
///
/// Expected: one locale query for two page requests
#[tokio::test]
async fn reuses_cached_locale_settings() {
    let test = store_with_locales().await;
    let app = app(app_state(&test));

    app.clone().oneshot(get_request("/en", &[])).await.unwrap();
    app.oneshot(get_request("/", &[])).await.unwrap();

    assert_eq!(test.query_count(LOCALE_QUERY).await.unwrap(), 1);
}
