use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{media::ImageDto, page::SeoDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AuthorDto {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BlogPostSummaryDto {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<ImageDto>,
    pub author: AuthorDto,
    pub published_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryDto>,
    pub featured: bool,
}

/// A run of body text sharing the same inline marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TextSpanDto {
    pub text: String,
    /// Link target when the run is annotated as a link.
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub strong: bool,
    #[serde(default)]
    pub em: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlockDto {
    Heading { level: u8, text: String },
    Paragraph {
        text: String,
        #[serde(default)]
        spans: Vec<TextSpanDto>,
    },
    Quote {
        text: String,
        #[serde(default)]
        spans: Vec<TextSpanDto>,
    },
    Image {
        image: ImageDto,
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BlogPostDto {
    #[serde(flatten)]
    pub summary: BlogPostSummaryDto,
    pub content: Vec<ContentBlockDto>,
    pub reading_minutes: u32,
    pub seo: Option<SeoDto>,
}

/// Long-form date used on blog cards and article headers, e.g. `March 4, 2025`.
pub fn format_published(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
