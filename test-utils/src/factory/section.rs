//! Page section factories.
//!
//! Sections are produced in the shape the page query projects: image fields
//! already resolved to `{alt, url}` and references already followed.

use serde_json::{json, Map, Value};

use crate::factory::helpers::{document_id, portable_text};

/// Factory for a single entry of a page's `sections` array.
///
/// Starts from a minimal section of the given type that has content to show
/// and lets tests override any field.
///
/// # Example
///
/// ```rust,ignore
/// let process = SectionFactory::process()
///     .nav_title("How it works")
///     .anchor("how")
///     .build();
/// ```
pub struct SectionFactory {
    fields: Map<String, Value>,
}

impl SectionFactory {
    /// Creates a section of `section_type` with no content fields.
    pub fn new(section_type: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("_type".to_string(), json!(section_type));
        fields.insert("_key".to_string(), json!(document_id("section")));
        Self { fields }
    }

    /// Single-slide hero with a heading and a primary call to action.
    pub fn hero() -> Self {
        Self::new("heroSection").field(
            "slides",
            json!([{
                "_type": "heroSlideImageRight",
                "tagline": "Dental care in Tashkent",
                "heading": "Save up to 70% on treatment",
                "body": portable_text("Modern clinic, experienced doctors."),
                "primaryCtaLabel": "Get a free quote",
                "image": image("https://cdn.sanity.io/images/hero.jpg"),
                "stats": [{"value": "15+", "label": "Years"}]
            }]),
        )
    }

    /// Process section with two steps.
    pub fn process() -> Self {
        Self::new("processSection").field("title", json!("How it works")).field(
            "steps",
            json!([
                {"title": "Send your X-ray", "description": "We review it within a day."},
                {"title": "Fly to Tashkent", "description": "We pick you up at the airport."}
            ]),
        )
    }

    /// Gallery section with one image.
    pub fn gallery() -> Self {
        Self::new("gallerySection").field(
            "images",
            json!([{"image": image("https://cdn.sanity.io/images/clinic.jpg"), "title": "Clinic"}]),
        )
    }

    /// Testimonials section with one review.
    pub fn testimonials() -> Self {
        Self::new("testimonialsSection").field(
            "testimonials",
            json!([{
                "name": "Anna",
                "country": "Germany",
                "treatmentName": "Veneers",
                "rating": 5,
                "text": "Great experience."
            }]),
        )
    }

    /// Sets the navigation bar label.
    pub fn nav_title(self, title: &str) -> Self {
        self.field("navLinkTitle", json!(title))
    }

    /// Sets the anchor id.
    pub fn anchor(self, id: &str) -> Self {
        self.field("navLinkId", json!(id))
    }

    pub fn active(self, is_active: bool) -> Self {
        self.field("isActive", json!(is_active))
    }

    pub fn in_navbar(self, include: bool) -> Self {
        self.field("includeInNavbar", json!(include))
    }

    /// Sets or replaces any field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Projected image value.
pub fn image(url: &str) -> Value {
    json!({"alt": null, "url": url})
}
