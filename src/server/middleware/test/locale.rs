use super::*;

/// Tests that localized paths pass through.
///
/// Expected: Pass with the path's locale, ignoring cookie and header
#[test]
fn passes_localized_paths() {
    let settings = settings();

    assert_eq!(
        resolve_request("/ru/blog/implants", None, Some("en"), Some("uz"), &settings),
        LocaleDecision::Pass {
            locale: "ru".to_string()
        }
    );
    assert_eq!(
        resolve_request("/uz", None, None, None, &settings),
        LocaleDecision::Pass {
            locale: "uz".to_string()
        }
    );
}

/// Tests the root redirect with no preference signals.
///
/// Expected: Redirect to `/en`
#[test]
fn redirects_root_to_default() {
    assert_eq!(
        resolve_request("/", None, None, None, &settings()),
        redirect("/en", "en")
    );
}

/// Tests that a supported cookie beats `Accept-Language`.
///
/// Expected: Redirect to the cookie's locale
#[test]
fn prefers_cookie() {
    assert_eq!(
        resolve_request("/blog", None, Some("uz"), Some("ru-RU,ru;q=0.9"), &settings()),
        redirect("/uz/blog", "uz")
    );
}

/// Tests that an unsupported cookie is ignored.
///
/// Expected: Redirect negotiated from `Accept-Language`
#[test]
fn ignores_unsupported_cookie() {
    assert_eq!(
        resolve_request("/blog", None, Some("de"), Some("de-DE, ru;q=0.8"), &settings()),
        redirect("/ru/blog", "ru")
    );
}

/// Tests that an unsupported locale-shaped prefix is replaced.
///
/// Expected: `/de/blog` redirects to `/en/blog`
#[test]
fn replaces_unsupported_locale_prefix() {
    assert_eq!(
        resolve_request("/de/blog", None, None, None, &settings()),
        redirect("/en/blog", "en")
    );
    assert_eq!(
        resolve_request("/de", None, None, None, &settings()),
        redirect("/en", "en")
    );
}

/// Tests that the query string survives the redirect.
///
/// Expected: Redirect location ends with the original query
#[test]
fn keeps_query_string() {
    assert_eq!(
        resolve_request("/blog", Some("page=2&tag=veneers"), None, None, &settings()),
        redirect("/en/blog?page=2&tag=veneers", "en")
    );
    assert_eq!(
        resolve_request("/", Some(""), None, None, &settings()),
        redirect("/en", "en")
    );
}

/// Tests which paths skip locale handling.
///
/// Expected: API, asset, framework and file paths bypass
#[test]
fn bypasses_reserved_paths() {
    assert!(should_bypass("/api/pages/home"));
    assert!(should_bypass("/api"));
    assert!(should_bypass("/assets/tailwind.css"));
    assert!(should_bypass("/_dioxus/ws"));
    assert!(should_bypass("/wasm/app_bg.wasm"));
    assert!(should_bypass("/favicon.ico"));

    assert!(!should_bypass("/"));
    assert!(!should_bypass("/apis"));
    assert!(!should_bypass("/en/blog"));
}

/// Tests reading the locale cookie.
///
/// Expected: value of the named cookie only
#[test]
fn reads_locale_cookie() {
    assert_eq!(
        cookie_value("theme=dark; site_locale=ru; other=1", "site_locale"),
        Some("ru")
    );
    assert_eq!(cookie_value("theme=dark", "site_locale"), None);
    assert_eq!(cookie_value("site_locale=", "site_locale"), None);
}

/// Tests the cookie written on responses.
///
/// Expected: one-year, site-wide, lax cookie
#[test]
fn builds_locale_cookie() {
    assert_eq!(
        locale_cookie("uz"),
        "site_locale=uz; Path=/; Max-Age=31536000; SameSite=Lax"
    );
}
