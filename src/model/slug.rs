//! Slug rules applied to CMS documents.
//!
//! Pages are stored once per locale, so their slugs carry the locale code as
//! a suffix (`home-en`, `home-ru`). Blog posts may be published without a
//! slug, in which case one is derived from the title.

pub const SLUG_MAX_LENGTH: usize = 96;

/// Lowercases `input` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`.
///
/// Leading and trailing dashes are trimmed before the slug is cut to
/// [`SLUG_MAX_LENGTH`], so a cut slug can end with `-` exactly as the CMS
/// studio stores it.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // Output is ASCII so byte truncation is safe.
    slug.truncate(SLUG_MAX_LENGTH);
    slug
}

/// Appends `-{locale}` to `slug` unless it already ends with it.
pub fn locale_slug(slug: &str, locale: &str) -> String {
    let suffix = format!("-{}", locale);
    if slug.ends_with(&suffix) {
        slug.to_string()
    } else {
        format!("{}{}", slug, suffix)
    }
}

/// Strips the `-{locale}` suffix added by [`locale_slug`].
pub fn base_slug<'a>(slug: &'a str, locale: &str) -> &'a str {
    slug.strip_suffix(&format!("-{}", locale)).unwrap_or(slug)
}
