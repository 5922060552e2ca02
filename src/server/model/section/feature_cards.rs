use serde::Deserialize;

use crate::{
    model::section::{FeatureCardDto, FeatureCardsSectionDto, SectionDto},
    server::{
        model::{
            media::{image_dto, ImageDocument},
            section::SectionSettings,
        },
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCardsSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<FeatureCardDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCardDocument {
    pub icon: Option<ImageDocument>,
    pub icon_bg_color: Option<ColorValue>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
}

/// Color field: either the picker object (only its hex code is used) or a
/// plain string entered before the picker was installed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Plain(String),
    Picker { hex: Option<String> },
}

impl ColorValue {
    pub fn into_hex(color: Option<ColorValue>) -> Option<String> {
        match color? {
            ColorValue::Plain(value) => non_empty(Some(value)),
            ColorValue::Picker { hex } => non_empty(hex),
        }
    }
}

impl FeatureCardsSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let items: Vec<FeatureCardDto> = self
            .items
            .into_iter()
            .filter_map(|item| {
                Some(FeatureCardDto {
                    title: non_empty(item.title)?,
                    icon: image_dto(item.icon),
                    icon_bg_color: ColorValue::into_hex(item.icon_bg_color),
                    description: non_empty(item.description),
                    badge: non_empty(item.badge),
                })
            })
            .collect();

        if items.is_empty() {
            return None;
        }

        Some(SectionDto::FeatureCards(FeatureCardsSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            items,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_both_color_shapes() {
        let picker: ColorValue = serde_json::from_value(json!({"hex": "#e0f2fe", "alpha": 1})).unwrap();
        let plain: ColorValue = serde_json::from_value(json!("#fef3c7")).unwrap();
        assert_eq!(ColorValue::into_hex(Some(picker)), Some("#e0f2fe".to_string()));
        assert_eq!(ColorValue::into_hex(Some(plain)), Some("#fef3c7".to_string()));
        assert_eq!(ColorValue::into_hex(None), None);
    }

    #[test]
    fn cards_without_title_are_dropped() {
        let doc: FeatureCardsSectionDocument = serde_json::from_value(json!({
            "title": "Why us",
            "items": [
                {"title": "Save 70%", "iconBgColor": {"hex": "#dbeafe"}, "icon": {"url": null}},
                {"description": "no title"}
            ]
        }))
        .unwrap();

        let Some(SectionDto::FeatureCards(section)) = doc.into_dto("benefits".to_string()) else {
            panic!("expected feature cards section");
        };
        assert_eq!(section.items.len(), 1);
        assert!(section.items[0].icon.is_none());
        assert_eq!(section.items[0].icon_bg_color.as_deref(), Some("#dbeafe"));
    }
}
