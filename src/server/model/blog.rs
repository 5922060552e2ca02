//! Blog post documents and their conversion to summaries and full articles.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{
        blog::{AuthorDto, BlogPostDto, BlogPostSummaryDto, CategoryDto, ContentBlockDto},
        media::ImageDto,
        slug::slugify,
    },
    server::{
        model::{
            media::{image_dto, ImageDocument},
            page::SeoDocument,
            portable_text::TextBlock,
        },
        util::{
            serde::nullable,
            text::{non_empty, title_case, word_count},
        },
    },
};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    /// ISO 8601 timestamp; unparsable values are treated as unpublished.
    pub published_at: Option<String>,
    pub author: Option<AuthorDocument>,
    pub featured_image: Option<ImageDocument>,
    /// Raw category entries: treatment references or legacy string keys.
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<Value>,
    /// `categories[]->` projection, aligned with `categories`.
    #[serde(default, deserialize_with = "nullable")]
    pub category_docs: Vec<Option<CategoryDocument>>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Vec<Value>,
    pub seo: Option<SeoDocument>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDocument {
    pub name: Option<String>,
    /// Projected `image.asset->url`.
    pub image: Option<String>,
}

/// Dereferenced `treatment` document used as a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Image block inside the article body.
#[derive(Debug, Clone, Default, Deserialize)]
struct ImageBlock {
    url: Option<String>,
    alt: Option<String>,
    caption: Option<String>,
}

impl BlogPostDocument {
    /// Public slug of the post: the stored slug, else one derived from the
    /// title. `None` when neither yields anything usable.
    pub fn resolved_slug(&self) -> Option<String> {
        non_empty(self.slug.clone()).or_else(|| {
            let derived = slugify(self.title.as_deref().unwrap_or_default());
            (!derived.is_empty()).then_some(derived)
        })
    }

    pub fn into_summary_dto(self) -> Option<BlogPostSummaryDto> {
        let slug = self.resolved_slug()?;
        let categories = categories(self.categories, self.category_docs);

        Some(BlogPostSummaryDto {
            slug,
            title: non_empty(self.title).unwrap_or_default(),
            excerpt: non_empty(self.excerpt),
            featured_image: image_dto(self.featured_image),
            author: author(self.author),
            published_at: self.published_at.as_deref().and_then(parse_timestamp),
            categories,
            featured: self.featured.unwrap_or(false),
        })
    }

    pub fn into_dto(mut self) -> Option<BlogPostDto> {
        let content = content_blocks(std::mem::take(&mut self.content));
        let seo = self.seo.take().and_then(SeoDocument::into_dto);
        let summary = self.into_summary_dto()?;

        Some(BlogPostDto {
            reading_minutes: reading_minutes(&content),
            summary,
            content,
            seo,
        })
    }
}

fn author(author: Option<AuthorDocument>) -> AuthorDto {
    let author = author.unwrap_or_default();

    AuthorDto {
        name: non_empty(author.name).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        image: non_empty(author.image),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Resolves categories from treatment references, or title-cases legacy
/// string keys (`root-canal` becomes `Root Canal`).
pub fn categories(raw: Vec<Value>, resolved: Vec<Option<CategoryDocument>>) -> Vec<CategoryDto> {
    let mut resolved = resolved.into_iter();

    raw.into_iter()
        .filter_map(|entry| {
            let doc = resolved.next().flatten();

            if let Some(doc) = doc {
                if let Some(name) = non_empty(doc.name) {
                    return Some(CategoryDto {
                        id: doc.id,
                        name,
                        slug: non_empty(doc.slug),
                    });
                }
            }

            match entry {
                Value::String(key) if !key.trim().is_empty() => {
                    let key = key.trim().to_string();
                    Some(CategoryDto {
                        id: key.clone(),
                        name: title_case(&key),
                        slug: Some(key),
                    })
                }
                _ => None,
            }
        })
        .collect()
}

/// Converts the article body into renderable blocks.
///
/// Headings keep levels 1 to 4, `blockquote` becomes a quote and every other
/// text style a paragraph. Paragraphs and quotes keep their inline marks,
/// including links. Images without a URL and empty blocks are dropped.
pub fn content_blocks(raw: Vec<Value>) -> Vec<ContentBlockDto> {
    raw.into_iter()
        .filter_map(|value| match value.get("_type").and_then(Value::as_str) {
            Some("image") => {
                let block: ImageBlock = serde_json::from_value(value).ok()?;
                Some(ContentBlockDto::Image {
                    image: ImageDto {
                        url: non_empty(block.url)?,
                        alt: non_empty(block.alt),
                    },
                    caption: non_empty(block.caption),
                })
            }
            Some("block") | None => {
                let block: TextBlock = serde_json::from_value(value).ok()?;
                let text = block.text();
                if text.is_empty() {
                    return None;
                }

                Some(match block.style.as_deref() {
                    Some("h1") => ContentBlockDto::Heading { level: 1, text },
                    Some("h2") => ContentBlockDto::Heading { level: 2, text },
                    Some("h3") => ContentBlockDto::Heading { level: 3, text },
                    Some("h4") => ContentBlockDto::Heading { level: 4, text },
                    Some("blockquote") => ContentBlockDto::Quote {
                        text,
                        spans: block.spans(),
                    },
                    _ => ContentBlockDto::Paragraph {
                        text,
                        spans: block.spans(),
                    },
                })
            }
            Some(_) => None,
        })
        .collect()
}

/// `ceil(words / 200)` minutes, at least one.
pub fn reading_minutes(content: &[ContentBlockDto]) -> u32 {
    let words: usize = content
        .iter()
        .map(|block| match block {
            ContentBlockDto::Heading { text, .. }
            | ContentBlockDto::Paragraph { text, .. }
            | ContentBlockDto::Quote { text, .. } => word_count(text),
            ContentBlockDto::Image { caption, .. } => caption.as_deref().map_or(0, word_count),
        })
        .sum();

    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(value: Value) -> BlogPostDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn slug_falls_back_to_title() {
        let doc = post(json!({"_id": "p1", "title": "Veneers vs. Crowns: Which One?"}));
        assert_eq!(doc.resolved_slug().as_deref(), Some("veneers-vs-crowns-which-one"));

        let doc = post(json!({"_id": "p2", "title": "Ignored", "slug": "custom-slug"}));
        assert_eq!(doc.resolved_slug().as_deref(), Some("custom-slug"));
    }

    #[test]
    fn posts_without_any_slug_are_dropped() {
        let doc = post(json!({"_id": "p1", "title": "Виниры"}));
        assert!(doc.into_summary_dto().is_none());
    }

    #[test]
    fn summary_defaults() {
        let summary = post(json!({
            "_id": "p1",
            "title": "Implants guide",
            "publishedAt": "2025-03-04T10:00:00Z",
            "author": {"name": "  ", "image": ""},
            "featuredImage": {"url": "", "alt": "x"},
            "categories": null
        }))
        .into_summary_dto()
        .unwrap();

        assert_eq!(summary.author.name, UNKNOWN_AUTHOR);
        assert!(summary.author.image.is_none());
        assert!(summary.featured_image.is_none());
        assert!(summary.categories.is_empty());
        assert!(!summary.featured);
        assert_eq!(
            summary.published_at.map(|d| d.to_rfc3339()),
            Some("2025-03-04T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn invalid_dates_are_ignored() {
        let summary = post(json!({"_id": "p", "title": "T", "publishedAt": "yesterday"}))
            .into_summary_dto()
            .unwrap();
        assert!(summary.published_at.is_none());
    }

    #[test]
    fn resolves_reference_and_legacy_categories() {
        let result = categories(
            vec![
                json!({"_ref": "treatment-implants", "_type": "reference"}),
                json!("root-canal"),
                json!({"_ref": "missing"}),
            ],
            vec![
                Some(CategoryDocument {
                    id: "treatment-implants".to_string(),
                    name: Some("Dental Implants".to_string()),
                    slug: Some("dental-implants".to_string()),
                }),
                None,
                None,
            ],
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Dental Implants");
        assert_eq!(result[1].name, "Root Canal");
        assert_eq!(result[1].slug.as_deref(), Some("root-canal"));
    }

    #[test]
    fn converts_content_blocks() {
        let blocks = content_blocks(vec![
            json!({"_type": "block", "style": "h2", "children": [{"text": "Why Tashkent"}]}),
            json!({"_type": "block", "style": "h5", "children": [{"text": "Small"}]}),
            json!({"_type": "block", "style": "blockquote", "children": [{"text": "Best trip"}]}),
            json!({"_type": "block", "style": "normal", "children": [{"text": "   "}]}),
            json!({"_type": "image", "url": "https://cdn.sanity.io/x.jpg", "caption": "Clinic"}),
            json!({"_type": "image", "asset": {"_ref": "image-unresolved"}}),
            json!({"_type": "youtube", "url": "https://youtu.be/x"}),
        ]);

        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks[0],
            ContentBlockDto::Heading {
                level: 2,
                text: "Why Tashkent".to_string()
            }
        );
        assert!(matches!(blocks[1], ContentBlockDto::Paragraph { .. }));
        assert!(matches!(blocks[2], ContentBlockDto::Quote { .. }));
        assert!(matches!(blocks[3], ContentBlockDto::Image { .. }));
    }

    #[test]
    fn paragraphs_keep_links() {
        let blocks = content_blocks(vec![json!({
            "_type": "block",
            "style": "normal",
            "markDefs": [{"_key": "a1", "_type": "link", "href": "/en#contact"}],
            "children": [
                {"text": "Book a "},
                {"text": "free consultation", "marks": ["a1"]}
            ]
        })]);

        let ContentBlockDto::Paragraph { text, spans } = &blocks[0] else {
            panic!("expected a paragraph, got {:?}", blocks[0]);
        };
        assert_eq!(text, "Book a free consultation");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text, "free consultation");
        assert_eq!(spans[1].href.as_deref(), Some("/en#contact"));
    }

    #[test]
    fn reading_time_rounds_up() {
        let paragraph = |words: usize| ContentBlockDto::Paragraph {
            text: vec!["word"; words].join(" "),
            spans: Vec::new(),
        };

        assert_eq!(reading_minutes(&[]), 1);
        assert_eq!(reading_minutes(&[paragraph(200)]), 1);
        assert_eq!(reading_minutes(&[paragraph(201)]), 2);
        assert_eq!(reading_minutes(&[paragraph(150), paragraph(300)]), 3);
    }

    #[test]
    fn full_post_carries_content_and_seo() {
        let dto = post(json!({
            "_id": "p1",
            "title": "Implants",
            "slug": "implants",
            "content": [{"_type": "block", "children": [{"text": "Hello there"}]}],
            "seo": {"metaTitle": "Implants abroad"}
        }))
        .into_dto()
        .unwrap();

        assert_eq!(dto.summary.slug, "implants");
        assert_eq!(dto.content.len(), 1);
        assert_eq!(dto.reading_minutes, 1);
        assert_eq!(
            dto.seo.and_then(|s| s.meta_title).as_deref(),
            Some("Implants abroad")
        );
    }
}
