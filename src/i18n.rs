//! Locale-aware URL handling.
//!
//! Every public page lives under a `/{locale}` prefix. These helpers are
//! shared by the server middleware, which redirects unlocalized requests,
//! and by the client, which builds language-switch links. The set of
//! supported codes is always passed in because it comes from the CMS.

/// Returns the locale prefix of `path` when it is one of `supported`.
pub fn locale_from_path<'a>(path: &str, supported: &[&'a str]) -> Option<&'a str> {
    let segment = first_segment(path)?;
    supported.iter().copied().find(|code| *code == segment)
}

/// Removes a supported locale prefix from `path`.
///
/// The result always starts with `/`; a bare locale path maps to `/`.
pub fn strip_locale(path: &str, supported: &[&str]) -> String {
    let normalized = normalize(path);

    match locale_from_path(&normalized, supported) {
        Some(code) => {
            let rest = &normalized[code.len() + 1..];
            if rest.is_empty() {
                "/".to_string()
            } else if rest.starts_with('/') {
                rest.to_string()
            } else {
                // `/en#contact` style fragments directly after the prefix
                format!("/{}", rest)
            }
        }
        None => normalized,
    }
}

/// Builds the `/{locale}` version of `path`, replacing any supported locale
/// prefix it already carries.
///
/// The root maps to `/{locale}` without a trailing slash. Fragments survive:
/// `/#contact` becomes `/{locale}#contact`.
pub fn localized_path(path: &str, locale: &str, supported: &[&str]) -> String {
    let rest = strip_locale(path, supported);

    if rest == "/" {
        format!("/{}", locale)
    } else if let Some(fragment) = rest.strip_prefix("/#") {
        format!("/{}#{}", locale, fragment)
    } else {
        format!("/{}{}", locale, rest)
    }
}

/// Whether `segment` has the shape of a locale code (`en`, `pt-BR`).
pub fn looks_like_locale(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let language = |b: &[u8]| b.iter().all(u8::is_ascii_lowercase);

    match bytes.len() {
        2 => language(bytes),
        5 => {
            language(&bytes[..2])
                && bytes[2] == b'-'
                && bytes[3..].iter().all(u8::is_ascii_uppercase)
        }
        _ => false,
    }
}

/// Parses an `Accept-Language` header into lowercase language tags ordered
/// by preference.
///
/// Tags with `q=0` are dropped; equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim().to_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // sort_by is stable, so ties keep their header order
    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Picks the first supported locale for an `Accept-Language` header.
///
/// Each preferred tag is tried as an exact (case-insensitive) match first,
/// then by its primary language subtag (`en-us` matches `en`).
pub fn negotiate(accept_language: &str, supported: &[&str]) -> Option<String> {
    for tag in parse_accept_language(accept_language) {
        if let Some(code) = supported.iter().find(|c| c.eq_ignore_ascii_case(&tag)) {
            return Some(code.to_string());
        }

        let primary = tag.split('-').next().unwrap_or(&tag);
        if let Some(code) = supported.iter().find(|c| c.eq_ignore_ascii_case(primary)) {
            return Some(code.to_string());
        }
    }

    None
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// First path segment, ignoring a leading `/` and any query or fragment.
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let segment = trimmed
        .split(|c| c == '/' || c == '#' || c == '?')
        .next()
        .unwrap_or_default();

    (!segment.is_empty()).then_some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED: &[&str] = &["en", "ru"];

    #[test]
    fn reads_first_segment() {
        assert_eq!(first_segment("/de/blog"), Some("de"));
        assert_eq!(first_segment("ru#contact"), Some("ru"));
        assert_eq!(first_segment("/en?ref=ad"), Some("en"));
        assert_eq!(first_segment("/"), None);
    }

    #[test]
    fn finds_locale_prefix() {
        assert_eq!(locale_from_path("/en", SUPPORTED), Some("en"));
        assert_eq!(locale_from_path("/ru/blog/my-post", SUPPORTED), Some("ru"));
        assert_eq!(locale_from_path("/de/blog", SUPPORTED), None);
        assert_eq!(locale_from_path("/english", SUPPORTED), None);
        assert_eq!(locale_from_path("/", SUPPORTED), None);
    }

    #[test]
    fn strips_locale_prefix() {
        assert_eq!(strip_locale("/en/blog", SUPPORTED), "/blog");
        assert_eq!(strip_locale("/ru", SUPPORTED), "/");
        assert_eq!(strip_locale("/blog", SUPPORTED), "/blog");
        assert_eq!(strip_locale("blog/post", SUPPORTED), "/blog/post");
    }

    #[test]
    fn localizes_paths() {
        assert_eq!(localized_path("/", "en", SUPPORTED), "/en");
        assert_eq!(localized_path("/blog", "ru", SUPPORTED), "/ru/blog");
        assert_eq!(localized_path("blog/my-post", "en", SUPPORTED), "/en/blog/my-post");
    }

    #[test]
    fn localizing_replaces_existing_prefix() {
        assert_eq!(localized_path("/en/blog", "ru", SUPPORTED), "/ru/blog");
        assert_eq!(localized_path("/en/blog", "en", SUPPORTED), "/en/blog");
        assert_eq!(localized_path("/ru", "en", SUPPORTED), "/en");
    }

    #[test]
    fn localizing_keeps_fragments() {
        assert_eq!(localized_path("/#contact", "en", SUPPORTED), "/en#contact");
        assert_eq!(localized_path("/ru#contact", "en", SUPPORTED), "/en#contact");
    }

    #[test]
    fn recognizes_locale_shapes() {
        assert!(looks_like_locale("en"));
        assert!(looks_like_locale("pt-BR"));
        assert!(!looks_like_locale("blog"));
        assert!(!looks_like_locale("EN"));
        assert!(!looks_like_locale("pt-br"));
    }

    #[test]
    fn parses_accept_language_by_quality() {
        let tags = parse_accept_language("ru;q=0.8, en-US,en;q=0.9, de;q=0");
        assert_eq!(tags, vec!["en-us", "en", "ru"]);
    }

    #[test]
    fn accept_language_ties_keep_header_order() {
        let tags = parse_accept_language("uz, ru, en");
        assert_eq!(tags, vec!["uz", "ru", "en"]);
    }

    #[test]
    fn negotiates_by_primary_subtag() {
        assert_eq!(negotiate("en-GB,en;q=0.9", SUPPORTED), Some("en".to_string()));
        assert_eq!(negotiate("de-DE, ru;q=0.5", SUPPORTED), Some("ru".to_string()));
        assert_eq!(negotiate("fr, de", SUPPORTED), None);
        assert_eq!(negotiate("", SUPPORTED), None);
    }

    #[test]
    fn negotiation_prefers_exact_region_match() {
        let supported = ["pt", "pt-BR"];
        assert_eq!(negotiate("pt-br", &supported), Some("pt-BR".to_string()));
        assert_eq!(negotiate("pt-PT", &supported), Some("pt".to_string()));
    }
}
