//! Locale prefix enforcement.
//!
//! Every page URL carries its locale as the first path segment. Requests
//! without a valid prefix are redirected to the localized path, picking the
//! locale from the `site_locale` cookie, then the `Accept-Language` header,
//! then the site default. Requests with a valid prefix pass through and get
//! their locale remembered in the cookie.

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;

use crate::{
    i18n::{first_segment, locale_from_path, localized_path, looks_like_locale, negotiate},
    server::{
        model::locale::LocaleSettings, service::locale::LocaleService, state::AppState,
    },
};

pub const LOCALE_COOKIE: &str = "site_locale";
pub const LOCALE_HEADER: &str = "x-locale";
const LOCALE_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Path prefixes served without a locale.
const BYPASS_PREFIXES: &[&str] = &["/api", "/assets", "/_dioxus", "/wasm"];

#[derive(Debug, Clone, PartialEq)]
pub enum LocaleDecision {
    /// Path already carries a supported locale.
    Pass { locale: String },
    /// Path must be localized; `location` includes the original query string.
    Redirect { location: String, locale: String },
}

/// Axum middleware redirecting unlocalized page requests.
///
/// Skips API, asset and framework paths. Localized requests get the
/// `x-locale` header on the way in and out plus the locale cookie on the
/// response; everything else answers `307 Temporary Redirect`.
pub async fn locale_redirect(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if should_bypass(&path) {
        return next.run(request).await;
    }

    let settings = LocaleService::new(&state.content, &state.locale_cache)
        .settings()
        .await;

    let headers = request.headers();
    let cookie = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| cookie_value(v, LOCALE_COOKIE))
        .map(str::to_string);
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let decision = resolve_request(
        &path,
        request.uri().query(),
        cookie.as_deref(),
        accept_language.as_deref(),
        &settings,
    );

    match decision {
        LocaleDecision::Pass { locale } => {
            if let Ok(value) = HeaderValue::from_str(&locale) {
                request.headers_mut().insert(LOCALE_HEADER, value);
            }

            let mut response = next.run(request).await;
            set_locale_headers(response.headers_mut(), &locale);
            response
        }
        LocaleDecision::Redirect { location, locale } => {
            tracing::debug!("Redirecting {} to {}", path, location);

            let mut response = Redirect::temporary(&location).into_response();
            set_locale_headers(response.headers_mut(), &locale);
            response
        }
    }
}

/// Decides whether a page request passes or is redirected.
///
/// # Arguments
/// - `path` - Request path
/// - `query` - Raw query string without `?`, kept on redirects
/// - `cookie` - Value of the locale cookie, if sent
/// - `accept_language` - `Accept-Language` header, if sent
/// - `settings` - Active locales and default
///
/// # Returns
/// - `LocaleDecision::Pass` - First segment is an active locale
/// - `LocaleDecision::Redirect` - Localized location and the chosen locale
pub fn resolve_request(
    path: &str,
    query: Option<&str>,
    cookie: Option<&str>,
    accept_language: Option<&str>,
    settings: &LocaleSettings,
) -> LocaleDecision {
    let supported = settings.codes();

    if let Some(locale) = locale_from_path(path, &supported) {
        return LocaleDecision::Pass {
            locale: locale.to_string(),
        };
    }

    let locale = cookie
        .filter(|code| settings.contains(code))
        .map(str::to_string)
        .or_else(|| accept_language.and_then(|header| negotiate(header, &supported)))
        .unwrap_or_else(|| settings.default_locale.clone());

    // `/de/blog` for a deactivated `de` becomes `/en/blog`, not `/en/de/blog`
    let rest = match first_segment(path) {
        Some(segment) if looks_like_locale(segment) => path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(segment))
            .unwrap_or(path),
        _ => path,
    };

    let mut location = localized_path(rest, &locale, &supported);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }

    LocaleDecision::Redirect { location, locale }
}

/// Whether `path` is served without a locale prefix.
pub fn should_bypass(path: &str) -> bool {
    let reserved = BYPASS_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });

    let is_file = path
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'));

    reserved || is_file
}

/// Reads one cookie from a `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value remembering `locale` for a year.
pub fn locale_cookie(locale: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        LOCALE_COOKIE, locale, LOCALE_COOKIE_MAX_AGE_SECS
    )
}

fn set_locale_headers(headers: &mut HeaderMap, locale: &str) {
    if let Ok(cookie) = HeaderValue::from_str(&locale_cookie(locale)) {
        headers.append(SET_COOKIE, cookie);
    }
    if let Ok(value) = HeaderValue::from_str(locale) {
        headers.insert(LOCALE_HEADER, value);
    }
}
