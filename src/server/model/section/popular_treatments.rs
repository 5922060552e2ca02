use serde::Deserialize;

use crate::{
    model::section::{PopularTreatmentsSectionDto, SectionDto, TreatmentCardDto},
    server::{
        model::{
            media::{image_dto, ImageDocument},
            section::SectionSettings,
        },
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct PopularTreatmentsSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub treatments: Vec<TreatmentCardDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentCardDocument {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub starting_price: Option<String>,
    pub duration: Option<String>,
    pub badge: Option<String>,
    pub image: Option<ImageDocument>,
}

impl PopularTreatmentsSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let treatments: Vec<TreatmentCardDto> = self
            .treatments
            .into_iter()
            .filter_map(|card| {
                Some(TreatmentCardDto {
                    name: non_empty(card.name)?,
                    short_description: non_empty(card.short_description),
                    starting_price: non_empty(card.starting_price),
                    duration: non_empty(card.duration),
                    badge: non_empty(card.badge),
                    image: image_dto(card.image),
                })
            })
            .collect();

        if treatments.is_empty() {
            return None;
        }

        Some(SectionDto::PopularTreatments(PopularTreatmentsSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            treatments,
        }))
    }
}
