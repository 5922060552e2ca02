use serde::Deserialize;

use crate::{
    model::section::{GalleryImageDto, GallerySectionDto, SectionDto},
    server::{
        model::{media::ImageDocument, section::SectionSettings},
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct GallerySectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<GalleryImageDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryImageDocument {
    pub image: Option<ImageDocument>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl GallerySectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let images: Vec<GalleryImageDto> = self
            .images
            .into_iter()
            .filter_map(|item| {
                Some(GalleryImageDto {
                    image: item.image?.into_dto()?,
                    title: non_empty(item.title),
                    description: non_empty(item.description),
                })
            })
            .collect();

        if images.is_empty() {
            return None;
        }

        Some(SectionDto::Gallery(GallerySectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            images,
        }))
    }
}
