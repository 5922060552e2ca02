use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::section::SectionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NavLinkDto {
    pub label: String,
    /// Either an in-page anchor (`#process`) or a localized path (`/en/blog`).
    pub href: String,
}

impl NavLinkDto {
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SeoDto {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContactLinkDto {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FooterDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub phone: Option<ContactLinkDto>,
    pub email: Option<ContactLinkDto>,
    pub whatsapp: Option<ContactLinkDto>,
    pub telegram: Option<ContactLinkDto>,
    pub facebook: Option<ContactLinkDto>,
    pub address: Option<String>,
    /// `src` of the Google Maps embed.
    pub map_embed_url: Option<String>,
}

/// A fully composed page ready to render.
///
/// `sections` only contains blocks that are active and have something to
/// show; `nav_links` is derived from them plus the fixed blog and contact
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PageDto {
    pub locale: String,
    pub slug: String,
    pub title: Option<String>,
    pub seo: Option<SeoDto>,
    pub nav_links: Vec<NavLinkDto>,
    pub sections: Vec<SectionDto>,
    pub footer: Option<FooterDto>,
}
