//! GROQ queries and projections.
//!
//! Projections resolve asset references to URLs and flatten references into
//! the shapes the documents in `server::model` expect. Documents may store
//! their locale as a reference to a `locale` document or, for older content,
//! as a plain code string; every filter accepts both.

/// Matches a document whose `locale` field is the code in `$locale`.
const LOCALE_FILTER: &str = "(locale->code == $locale || locale == $locale)";

/// Resolved locale code of the current document.
const LOCALE_CODE: &str = r#""locale": coalesce(locale->code, locale)"#;

const IMAGE: &str = r#"{ alt, "url": asset->url }"#;

pub fn locales() -> String {
    r#"*[_type == "locale"] | order(isDefault desc, name asc) {
  _id, code, name, flag, isDefault, isActive
}"#
    .to_string()
}

fn sections_projection() -> String {
    format!(
        r#"sections[] {{
    ...,
    _type == "heroSection" => {{
      "slides": slides[] {{ ..., "image": image {image} }}
    }},
    _type == "featureCardsSection" => {{
      "items": items[] {{ ..., "icon": icon {image} }}
    }},
    _type == "popularTreatmentsSection" => {{
      "treatments": treatments[] {{ ..., "image": image {image} }}
    }},
    _type == "priceComparisonSection" => {{
      "countries": countries[] {{ isHighlighted, "country": country->{{ _id, name, code, flag }} }},
      "treatments": treatments[] {{
        nameSource, customName,
        "treatmentName": treatment->name,
        "prices": prices[] {{ price, "countryId": country._ref }}
      }},
      "baseCountryId": baseCountry._ref
    }},
    _type == "additionalServicesSection" => {{
      "services": services[] {{ ..., "icon": icon {image} }},
      "infoCards": infoCards[] {{ ..., "icon": icon {image} }}
    }},
    _type == "processSection" => {{
      "steps": steps[] {{ ..., "icon": icon {image} }}
    }},
    _type == "gallerySection" => {{
      "images": images[] {{ ..., "image": image {image} }}
    }},
    _type == "testimonialsSection" => {{
      "testimonials": testimonials[] {{
        ..., "treatmentName": treatment->name, "image": image {image}
      }}
    }}
  }}"#,
        image = IMAGE
    )
}

/// Single page by slug. `$slug` is the bare slug and `$localizedSlug` the
/// per-locale form (`home-en`); both are accepted.
pub fn page_by_slug() -> String {
    format!(
        r#"*[_type == "page" && slug.current in [$slug, $localizedSlug] && {filter}]
  | order(_updatedAt desc) [0] {{
  _id, title, "slug": slug.current, {locale}, seo, footer,
  {sections}
}}"#,
        filter = LOCALE_FILTER,
        locale = LOCALE_CODE,
        sections = sections_projection()
    )
}

pub fn page_summaries() -> String {
    format!(
        r#"*[_type == "page"] | order(slug.current asc) {{
  _id, title, "slug": slug.current, {locale},
  "sectionsCount": count(sections)
}}"#,
        locale = LOCALE_CODE
    )
}

fn post_summary_fields() -> String {
    format!(
        r#"_id, title, "slug": slug.current, excerpt, publishedAt, featured,
  "author": author {{ name, "image": image.asset->url }},
  "featuredImage": featuredImage {image},
  categories,
  "categoryDocs": categories[]->{{ _id, name, "slug": slug.current }}"#,
        image = IMAGE
    )
}

fn post_full_fields() -> String {
    format!(
        r#"{summary},
  "content": content[] {{ ..., _type == "image" => {{ "url": asset->url }} }},
  seo"#,
        summary = post_summary_fields()
    )
}

/// Posts for `$locale`, newest first, optionally limited to featured posts.
///
/// The list is never sliced: posts whose slug cannot be derived are only
/// dropped after decoding, so a limit applied here would count them.
pub fn posts(featured_only: bool) -> String {
    let featured = if featured_only {
        " && featured == true"
    } else {
        ""
    };
    format!(
        r#"*[_type == "blogPost" && {filter}{featured}] | order(publishedAt desc) {{
  {fields}
}}"#,
        filter = LOCALE_FILTER,
        featured = featured,
        fields = post_summary_fields()
    )
}

pub fn post_by_slug() -> String {
    format!(
        r#"*[_type == "blogPost" && slug.current == $slug && {filter}]
  | order(_updatedAt desc) [0] {{
  {fields}
}}"#,
        filter = LOCALE_FILTER,
        fields = post_full_fields()
    )
}

/// Posts for `$locale` that have no stored slug; their public slug is
/// derived from the title.
pub fn posts_without_slug() -> String {
    format!(
        r#"*[_type == "blogPost" && !defined(slug.current) && {filter}] | order(publishedAt desc) {{
  {fields}
}}"#,
        filter = LOCALE_FILTER,
        fields = post_full_fields()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_list_is_never_sliced() {
        assert!(!posts(false).contains("[0..."));
        assert!(posts(true).contains("featured == true"));
        assert!(!posts(false).contains("featured == true"));
    }

    #[test]
    fn page_query_accepts_both_slug_forms() {
        let query = page_by_slug();
        assert!(query.contains("slug.current in [$slug, $localizedSlug]"));
        assert!(query.contains(LOCALE_FILTER));
        assert!(query.contains(r#""baseCountryId": baseCountry._ref"#));
    }
}
