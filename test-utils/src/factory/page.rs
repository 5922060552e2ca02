//! Page document factory.

use serde_json::{json, Value};

use crate::factory::helpers::document_id;

/// Factory for page documents as returned by the page query.
///
/// # Example
///
/// ```rust,ignore
/// let page = PageFactory::new("home-ru", "ru")
///     .title("Главная")
///     .section(SectionFactory::hero().build())
///     .build();
/// ```
pub struct PageFactory {
    slug: String,
    locale: String,
    title: Option<String>,
    seo: Option<Value>,
    footer: Option<Value>,
    sections: Vec<Value>,
}

impl PageFactory {
    /// Creates a page with no sections.
    ///
    /// # Arguments
    /// - `slug` - Stored slug, bare (`home`) or per-locale (`home-en`)
    /// - `locale` - Locale code of the page
    pub fn new(slug: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            locale: locale.into(),
            title: None,
            seo: None,
            footer: None,
            sections: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn seo(mut self, meta_title: &str, meta_description: &str) -> Self {
        self.seo = Some(json!({
            "metaTitle": meta_title,
            "metaDescription": meta_description,
        }));
        self
    }

    /// Sets the raw footer object.
    pub fn footer(mut self, footer: Value) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Appends a section, see `factory::section`.
    pub fn section(mut self, section: Value) -> Self {
        self.sections.push(section);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "_id": document_id("page"),
            "title": self.title,
            "slug": self.slug,
            "locale": self.locale,
            "seo": self.seo,
            "footer": self.footer,
            "sections": self.sections,
        })
    }
}

/// Creates a page with no sections.
pub fn create_page(slug: &str, locale: &str) -> Value {
    PageFactory::new(slug, locale).build()
}

/// Creates a page listing row as returned by the page summaries query.
pub fn create_page_summary(slug: &str, locale: &str, sections_count: u32) -> Value {
    json!({
        "_id": document_id("page"),
        "title": slug,
        "slug": slug,
        "locale": locale,
        "sectionsCount": sections_count,
    })
}

/// Footer with an email address and a phone number.
pub fn create_footer() -> Value {
    json!({
        "title": "Contact us",
        "phone": {"number": "+998 90 123 45 67"},
        "email": {"address": "care@example.com"},
    })
}
