use serde::Deserialize;

use crate::{
    model::section::{AdditionalServicesSectionDto, InfoCardDto, SectionDto, ServiceItemDto},
    server::{
        model::{
            media::{image_dto, ImageDocument},
            section::{feature_cards::ColorValue, SectionSettings},
        },
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalServicesSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub badge_text: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub services: Vec<ServiceItemDocument>,
    #[serde(default, deserialize_with = "nullable")]
    pub info_cards: Vec<InfoCardDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemDocument {
    pub icon: Option<ImageDocument>,
    pub icon_bg_color: Option<ColorValue>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub included: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCardDocument {
    pub icon: Option<ImageDocument>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub bg_color: Option<ColorValue>,
}

impl AdditionalServicesSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let services: Vec<ServiceItemDto> = self
            .services
            .into_iter()
            .filter_map(|service| {
                Some(ServiceItemDto {
                    title: non_empty(service.title)?,
                    icon: image_dto(service.icon),
                    icon_bg_color: ColorValue::into_hex(service.icon_bg_color),
                    description: non_empty(service.description),
                    included: service.included.unwrap_or(true),
                })
            })
            .collect();

        let info_cards: Vec<InfoCardDto> = self
            .info_cards
            .into_iter()
            .filter_map(|card| {
                Some(InfoCardDto {
                    title: non_empty(card.title)?,
                    icon: image_dto(card.icon),
                    description: non_empty(card.description),
                    bg_color: ColorValue::into_hex(card.bg_color),
                })
            })
            .collect();

        if services.is_empty() && info_cards.is_empty() {
            return None;
        }

        Some(SectionDto::AdditionalServices(AdditionalServicesSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            badge_text: non_empty(self.badge_text),
            services,
            info_cards,
        }))
    }
}
