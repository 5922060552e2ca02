use serde::Deserialize;

use crate::{model::media::ImageDto, server::util::text::non_empty};

/// Image field projected as `{ alt, "url": asset->url }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageDocument {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl ImageDocument {
    /// Returns `None` when the asset reference did not resolve to a URL.
    pub fn into_dto(self) -> Option<ImageDto> {
        let url = non_empty(self.url)?;

        Some(ImageDto {
            url,
            alt: non_empty(self.alt),
        })
    }
}

/// Converts an optional image field, dropping images without a URL.
pub fn image_dto(image: Option<ImageDocument>) -> Option<ImageDto> {
    image.and_then(ImageDocument::into_dto)
}
