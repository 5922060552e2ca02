use serde::Deserialize;

use crate::{
    model::section::{SectionDto, TestimonialDto, TestimonialsSectionDto},
    server::{
        model::{
            media::{image_dto, ImageDocument},
            section::SectionSettings,
        },
        util::{serde::nullable, text::non_empty},
    },
};

pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialsSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub testimonials: Vec<TestimonialDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDocument {
    pub name: Option<String>,
    pub country: Option<String>,
    /// Name of the referenced treatment document.
    pub treatment_name: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub image: Option<ImageDocument>,
}

/// Star rating clamped to 1..=5, defaulting to 5.
pub fn rating(value: Option<f64>) -> u8 {
    match value {
        Some(r) if r.is_finite() => r.round().clamp(1.0, 5.0) as u8,
        _ => DEFAULT_RATING,
    }
}

impl TestimonialsSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let testimonials: Vec<TestimonialDto> = self
            .testimonials
            .into_iter()
            .filter_map(|t| {
                Some(TestimonialDto {
                    name: non_empty(t.name)?,
                    text: non_empty(t.text)?,
                    country: non_empty(t.country),
                    treatment: non_empty(t.treatment_name),
                    rating: rating(t.rating),
                    image: image_dto(t.image),
                })
            })
            .collect();

        if testimonials.is_empty() {
            return None;
        }

        Some(SectionDto::Testimonials(TestimonialsSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            testimonials,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_is_clamped() {
        assert_eq!(rating(None), 5);
        assert_eq!(rating(Some(0.0)), 1);
        assert_eq!(rating(Some(9.0)), 5);
        assert_eq!(rating(Some(3.6)), 4);
    }

    #[test]
    fn incomplete_testimonials_are_dropped() {
        let doc: TestimonialsSectionDocument = serde_json::from_value(json!({
            "testimonials": [
                {"name": "Anna", "text": "Great clinic", "country": "Germany", "treatmentName": "Veneers"},
                {"name": "", "text": "No name"},
                {"name": "Tom"}
            ]
        }))
        .unwrap();

        let Some(SectionDto::Testimonials(section)) = doc.into_dto("testimonials".to_string())
        else {
            panic!("expected testimonials section");
        };
        assert_eq!(section.testimonials.len(), 1);
        assert_eq!(section.testimonials[0].rating, 5);
        assert_eq!(section.testimonials[0].treatment.as_deref(), Some("Veneers"));
    }

    #[test]
    fn section_without_testimonials_is_omitted() {
        let doc: TestimonialsSectionDocument =
            serde_json::from_value(json!({"title": "Reviews", "testimonials": [{"name": "Tom"}]}))
                .unwrap();
        assert!(doc.into_dto("testimonials".to_string()).is_none());
    }
}
