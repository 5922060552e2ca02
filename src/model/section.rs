//! Renderable page sections.
//!
//! `SectionDto` is the closed set of blocks the client knows how to draw.
//! Every variant carries the anchor id the section is rendered under so the
//! navigation links and the page stay in sync.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::media::ImageDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionDto {
    Hero(HeroSectionDto),
    FeatureCards(FeatureCardsSectionDto),
    PopularTreatments(PopularTreatmentsSectionDto),
    PriceComparison(PriceComparisonSectionDto),
    AdditionalServices(AdditionalServicesSectionDto),
    Process(ProcessSectionDto),
    Gallery(GallerySectionDto),
    Testimonials(TestimonialsSectionDto),
}

impl SectionDto {
    pub fn anchor(&self) -> &str {
        match self {
            Self::Hero(s) => &s.anchor,
            Self::FeatureCards(s) => &s.anchor,
            Self::PopularTreatments(s) => &s.anchor,
            Self::PriceComparison(s) => &s.anchor,
            Self::AdditionalServices(s) => &s.anchor,
            Self::Process(s) => &s.anchor,
            Self::Gallery(s) => &s.anchor,
            Self::Testimonials(s) => &s.anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CtaDto {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum HeroDisplayMode {
    Single,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    ImageLeft,
    ImageRight,
    Background,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    None,
    Light,
    Medium,
    Dark,
}

impl Overlay {
    /// Tailwind class for the darkening layer drawn over banner images.
    pub fn class(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Light => "bg-black/10",
            Self::Medium => "bg-black/30",
            Self::Dark => "bg-black/50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ContentPosition {
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HeroStatDto {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HeroBadgeDto {
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HeroSlideDto {
    pub layout: SlideLayout,
    pub tagline: Option<String>,
    pub heading: Option<String>,
    pub body: Option<String>,
    pub primary_cta: Option<CtaDto>,
    pub secondary_cta: Option<CtaDto>,
    pub image: Option<ImageDto>,
    pub stats: Vec<HeroStatDto>,
    pub badge: Option<HeroBadgeDto>,
    pub overlay: Overlay,
    pub content_position: ContentPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HeroSectionDto {
    pub anchor: String,
    pub mode: HeroDisplayMode,
    pub autoplay: bool,
    pub autoplay_interval_secs: u32,
    pub slides: Vec<HeroSlideDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FeatureCardDto {
    pub icon: Option<ImageDto>,
    pub icon_bg_color: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FeatureCardsSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Vec<FeatureCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TreatmentCardDto {
    pub name: String,
    pub short_description: Option<String>,
    pub starting_price: Option<String>,
    pub duration: Option<String>,
    pub badge: Option<String>,
    pub image: Option<ImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PopularTreatmentsSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub treatments: Vec<TreatmentCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CountryColumnDto {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub flag: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PriceRowDto {
    pub treatment: String,
    /// One entry per country column, in column order.
    pub prices: Vec<Option<String>>,
    pub savings_percent: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FooterNoteDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PriceComparisonSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub countries: Vec<CountryColumnDto>,
    pub rows: Vec<PriceRowDto>,
    pub footer_notes: Vec<FooterNoteDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServiceItemDto {
    pub icon: Option<ImageDto>,
    pub icon_bg_color: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InfoCardDto {
    pub icon: Option<ImageDto>,
    pub title: String,
    pub description: Option<String>,
    pub bg_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdditionalServicesSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub badge_text: Option<String>,
    pub services: Vec<ServiceItemDto>,
    pub info_cards: Vec<InfoCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProcessStepDto {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<ImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProcessSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Vec<ProcessStepDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GalleryImageDto {
    pub image: ImageDto,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GallerySectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub images: Vec<GalleryImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TestimonialDto {
    pub name: String,
    pub country: Option<String>,
    pub treatment: Option<String>,
    pub rating: u8,
    pub text: String,
    pub image: Option<ImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TestimonialsSectionDto {
    pub anchor: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub testimonials: Vec<TestimonialDto>,
}
