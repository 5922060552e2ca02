//! Page sections as stored in the content store.
//!
//! A page's `sections` array is decoded one element at a time so a single
//! malformed or unknown block never takes the rest of the page down with it.
//! Each decoded block is normalized into a [`SectionDto`] or dropped when it
//! is switched off or has nothing to show.

pub mod additional_services;
pub mod feature_cards;
pub mod gallery;
pub mod hero;
pub mod popular_treatments;
pub mod price_comparison;
pub mod process;
pub mod testimonials;

use dioxus_logger::tracing;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{page::NavLinkDto, section::SectionDto},
    server::util::text::non_empty,
};

use additional_services::AdditionalServicesSectionDocument;
use feature_cards::FeatureCardsSectionDocument;
use gallery::GallerySectionDocument;
use hero::HeroSectionDocument;
use popular_treatments::PopularTreatmentsSectionDocument;
use price_comparison::PriceComparisonSectionDocument;
use process::ProcessSectionDocument;
use testimonials::TestimonialsSectionDocument;

/// Visibility and navigation fields shared by every section type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSettings {
    pub nav_link_title: Option<String>,
    pub nav_link_id: Option<String>,
    pub is_active: Option<bool>,
    pub include_in_navbar: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum SectionDocument {
    HeroSection(HeroSectionDocument),
    FeatureCardsSection(FeatureCardsSectionDocument),
    PopularTreatmentsSection(PopularTreatmentsSectionDocument),
    PriceComparisonSection(PriceComparisonSectionDocument),
    AdditionalServicesSection(AdditionalServicesSectionDocument),
    ProcessSection(ProcessSectionDocument),
    GallerySection(GallerySectionDocument),
    TestimonialsSection(TestimonialsSectionDocument),
}

/// A rendered section plus the label it contributes to the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub section: SectionDto,
    pub nav_title: Option<String>,
}

impl SectionDocument {
    pub fn settings(&self) -> &SectionSettings {
        match self {
            Self::HeroSection(s) => &s.settings,
            Self::FeatureCardsSection(s) => &s.settings,
            Self::PopularTreatmentsSection(s) => &s.settings,
            Self::PriceComparisonSection(s) => &s.settings,
            Self::AdditionalServicesSection(s) => &s.settings,
            Self::ProcessSection(s) => &s.settings,
            Self::GallerySection(s) => &s.settings,
            Self::TestimonialsSection(s) => &s.settings,
        }
    }

    /// Anchor id used when the editor did not set `navLinkId`.
    pub fn default_anchor(&self) -> &'static str {
        match self {
            Self::HeroSection(_) => "home",
            Self::FeatureCardsSection(_) => "benefits",
            Self::PopularTreatmentsSection(_) => "services",
            Self::PriceComparisonSection(_) => "pricing",
            Self::AdditionalServicesSection(_) => "additional-services",
            Self::ProcessSection(_) => "process",
            Self::GallerySection(_) => "gallery",
            Self::TestimonialsSection(_) => "testimonials",
        }
    }

    /// Normalizes the section, or returns `None` when it is inactive or empty.
    pub fn into_page_section(self) -> Option<PageSection> {
        let settings = self.settings().clone();
        if settings.is_active == Some(false) {
            return None;
        }

        let anchor = non_empty(settings.nav_link_id)
            .unwrap_or_else(|| self.default_anchor().to_string());

        let section = match self {
            Self::HeroSection(s) => s.into_dto(anchor),
            Self::FeatureCardsSection(s) => s.into_dto(anchor),
            Self::PopularTreatmentsSection(s) => s.into_dto(anchor),
            Self::PriceComparisonSection(s) => s.into_dto(anchor),
            Self::AdditionalServicesSection(s) => s.into_dto(anchor),
            Self::ProcessSection(s) => s.into_dto(anchor),
            Self::GallerySection(s) => s.into_dto(anchor),
            Self::TestimonialsSection(s) => s.into_dto(anchor),
        }?;

        let nav_title = if settings.include_in_navbar.unwrap_or(true) {
            non_empty(settings.nav_link_title)
        } else {
            None
        };

        Some(PageSection { section, nav_title })
    }
}

/// Decodes and normalizes a page's raw `sections` array, keeping order.
pub fn compose_sections(raw: Vec<Value>) -> Vec<PageSection> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let kind = value
                .get("_type")
                .and_then(Value::as_str)
                .unwrap_or("<untyped>")
                .to_string();

            match serde_json::from_value::<SectionDocument>(value) {
                Ok(doc) => {
                    let section = doc.into_page_section();
                    if section.is_none() {
                        tracing::debug!("Omitting inactive or empty section {} ({})", index, kind);
                    }
                    section
                }
                Err(e) => {
                    tracing::warn!("Skipping section {} ({}): {}", index, kind, e);
                    None
                }
            }
        })
        .collect()
}

/// Navigation links for a page: one per section that opted in, in page
/// order, then the fixed blog and contact links.
pub fn nav_links(sections: &[PageSection], locale: &str) -> Vec<NavLinkDto> {
    sections
        .iter()
        .filter_map(|s| {
            s.nav_title.as_ref().map(|label| NavLinkDto {
                label: label.clone(),
                href: format!("#{}", s.section.anchor()),
            })
        })
        .chain(fixed_nav_links(locale))
        .collect()
}

pub fn fixed_nav_links(locale: &str) -> [NavLinkDto; 2] {
    [
        NavLinkDto {
            label: "Blog".to_string(),
            href: format!("/{}/blog", locale),
        },
        NavLinkDto {
            label: "Contact".to_string(),
            href: "#contact".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn process(extra: Value) -> Value {
        let mut section = json!({
            "_type": "processSection",
            "_key": "p1",
            "title": "How it works",
            "steps": [{"title": "Consultation"}]
        });
        if let (Some(target), Value::Object(fields)) = (section.as_object_mut(), extra) {
            target.extend(fields);
        }
        section
    }

    #[test]
    fn unknown_and_malformed_sections_are_skipped() {
        let sections = compose_sections(vec![
            json!({"_type": "videoSection", "url": "https://example.com"}),
            json!({"_type": "processSection", "steps": "not an array"}),
            json!("not an object"),
            process(json!({})),
        ]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section.anchor(), "process");
    }

    #[test]
    fn inactive_sections_are_omitted() {
        let sections = compose_sections(vec![
            process(json!({"isActive": false})),
            process(json!({"isActive": true, "navLinkId": "steps"})),
        ]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section.anchor(), "steps");
    }

    #[test]
    fn empty_sections_are_omitted() {
        let sections = compose_sections(vec![json!({
            "_type": "gallerySection",
            "images": [{"image": {"url": ""}}]
        })]);
        assert!(sections.is_empty());
    }

    #[test]
    fn anchors_default_per_type() {
        let sections = compose_sections(vec![
            json!({"_type": "heroSection", "slides": [{"_type": "heroSlideImageRight", "heading": "Hi"}]}),
            json!({"_type": "additionalServicesSection", "services": [{"title": "Transfer"}]}),
            process(json!({"navLinkId": "  "})),
        ]);

        let anchors: Vec<_> = sections.iter().map(|s| s.section.anchor()).collect();
        assert_eq!(anchors, vec!["home", "additional-services", "process"]);
    }

    #[test]
    fn nav_links_follow_page_order_then_fixed_links() {
        let sections = compose_sections(vec![
            process(json!({"navLinkTitle": "Process"})),
            process(json!({"navLinkTitle": "Hidden", "includeInNavbar": false, "navLinkId": "hidden"})),
            process(json!({"navLinkTitle": "", "navLinkId": "untitled"})),
            json!({
                "_type": "gallerySection",
                "navLinkTitle": "Gallery",
                "images": [{"image": {"url": "https://cdn.sanity.io/a.jpg"}}]
            }),
        ]);

        let links = nav_links(&sections, "ru");
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#process", "#gallery", "/ru/blog", "#contact"]);
        assert_eq!(links[0].label, "Process");
    }
}
