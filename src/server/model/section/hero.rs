//! Hero section normalization.
//!
//! Editors can configure several slides and a display mode. The renderer only
//! ever sees a consistent shape: a slider with at least two slides, or a
//! single slide.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::section::{
        ContentPosition, CtaDto, HeroBadgeDto, HeroDisplayMode, HeroSectionDto, HeroSlideDto,
        HeroStatDto, Overlay, SectionDto, SlideLayout,
    },
    server::{
        model::{
            media::{image_dto, ImageDocument},
            portable_text::plain_text,
            section::SectionSettings,
        },
        util::{serde::nullable, text::non_empty},
    },
};

pub const DEFAULT_AUTOPLAY_INTERVAL_SECS: u32 = 5;
pub const MIN_AUTOPLAY_INTERVAL_SECS: u32 = 2;
pub const MAX_AUTOPLAY_INTERVAL_SECS: u32 = 30;

/// Link target for call-to-action buttons that omit one.
const DEFAULT_CTA_HREF: &str = "#contact";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub display_mode: Option<String>,
    pub autoplay: Option<bool>,
    pub autoplay_interval: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub slides: Vec<HeroSlideDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideDocument {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub tagline: Option<String>,
    pub heading: Option<String>,
    /// Plain text or rich-text blocks depending on the slide type.
    #[serde(default)]
    pub body: Value,
    pub primary_cta_label: Option<String>,
    pub primary_cta_href: Option<String>,
    pub secondary_cta_label: Option<String>,
    pub secondary_cta_href: Option<String>,
    pub image: Option<ImageDocument>,
    #[serde(default, deserialize_with = "nullable")]
    pub stats: Vec<HeroStatDocument>,
    pub badge_title: Option<String>,
    pub badge_subtitle: Option<String>,
    pub overlay: Option<String>,
    pub content_position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroStatDocument {
    pub value: Option<String>,
    pub label: Option<String>,
}

impl HeroSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let slider = self.display_mode.as_deref() == Some("slider") && self.slides.len() > 1;

        let mut slides: Vec<HeroSlideDto> =
            self.slides.into_iter().map(HeroSlideDocument::into_dto).collect();
        if slides.is_empty() {
            return None;
        }
        if !slider {
            slides.truncate(1);
        }

        Some(SectionDto::Hero(HeroSectionDto {
            anchor,
            mode: if slider {
                HeroDisplayMode::Slider
            } else {
                HeroDisplayMode::Single
            },
            autoplay: slider && self.autoplay.unwrap_or(false),
            autoplay_interval_secs: autoplay_interval(self.autoplay_interval),
            slides,
        }))
    }
}

impl HeroSlideDocument {
    pub fn into_dto(self) -> HeroSlideDto {
        let layout = slide_layout(self.kind.as_deref());

        HeroSlideDto {
            layout,
            tagline: non_empty(self.tagline),
            heading: non_empty(self.heading),
            body: plain_text(&self.body),
            primary_cta: cta(self.primary_cta_label, self.primary_cta_href),
            secondary_cta: cta(self.secondary_cta_label, self.secondary_cta_href),
            image: image_dto(self.image),
            stats: self
                .stats
                .into_iter()
                .filter_map(|stat| {
                    Some(HeroStatDto {
                        value: non_empty(stat.value)?,
                        label: non_empty(stat.label)?,
                    })
                })
                .collect(),
            badge: non_empty(self.badge_title).map(|title| HeroBadgeDto {
                title,
                subtitle: non_empty(self.badge_subtitle),
            }),
            overlay: overlay(self.overlay.as_deref()),
            content_position: content_position(layout, self.content_position.as_deref()),
        }
    }
}

/// Seconds between slides, defaulting to 5 and clamped to 2..=30.
pub fn autoplay_interval(configured: Option<f64>) -> u32 {
    match configured {
        Some(secs) if secs.is_finite() => (secs.round() as i64)
            .clamp(MIN_AUTOPLAY_INTERVAL_SECS as i64, MAX_AUTOPLAY_INTERVAL_SECS as i64)
            as u32,
        _ => DEFAULT_AUTOPLAY_INTERVAL_SECS,
    }
}

/// Unknown slide types render like an image-right slide.
pub fn slide_layout(kind: Option<&str>) -> SlideLayout {
    match kind {
        Some("heroSlideImageLeft") => SlideLayout::ImageLeft,
        Some("heroSlideBackground") => SlideLayout::Background,
        Some("heroSlideImageBanner") => SlideLayout::Banner,
        _ => SlideLayout::ImageRight,
    }
}

/// Restricts the content position to the values a layout supports.
///
/// Background slides accept left, center or right (default left); banner
/// slides accept top, center or bottom (default center). Split layouts
/// always place content on the left of their own column.
pub fn content_position(layout: SlideLayout, configured: Option<&str>) -> ContentPosition {
    match (layout, configured) {
        (SlideLayout::Background, Some("center")) => ContentPosition::Center,
        (SlideLayout::Background, Some("right")) => ContentPosition::Right,
        (SlideLayout::Background, _) => ContentPosition::Left,
        (SlideLayout::Banner, Some("top")) => ContentPosition::Top,
        (SlideLayout::Banner, Some("bottom")) => ContentPosition::Bottom,
        (SlideLayout::Banner, _) => ContentPosition::Center,
        _ => ContentPosition::Left,
    }
}

pub fn overlay(configured: Option<&str>) -> Overlay {
    match configured {
        Some("light") => Overlay::Light,
        Some("medium") => Overlay::Medium,
        Some("dark") => Overlay::Dark,
        _ => Overlay::None,
    }
}

fn cta(label: Option<String>, href: Option<String>) -> Option<CtaDto> {
    Some(CtaDto {
        label: non_empty(label)?,
        href: non_empty(href).unwrap_or_else(|| DEFAULT_CTA_HREF.to_string()),
    })
}
