//! Blog post document factory.

use serde_json::{json, Value};

use crate::factory::{
    helpers::{document_id, next_id},
    section::image,
};

/// Factory for blog post documents as returned by the blog queries.
///
/// Defaults to a published, non-featured post with a unique title and a slug
/// derived from it.
///
/// # Example
///
/// ```rust,ignore
/// let post = BlogPostFactory::new()
///     .title("Veneers in Tashkent")
///     .slug("veneers-in-tashkent")
///     .featured(true)
///     .build();
/// ```
pub struct BlogPostFactory {
    title: String,
    slug: Option<String>,
    excerpt: Option<String>,
    published_at: Option<String>,
    author: Option<String>,
    featured: bool,
    featured_image: Option<String>,
    categories: Vec<Value>,
    category_docs: Vec<Value>,
    content: Vec<Value>,
}

impl BlogPostFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            title: format!("Post {}", id),
            slug: Some(format!("post-{}", id)),
            excerpt: None,
            published_at: Some("2025-01-15T09:00:00Z".to_string()),
            author: Some("Dr. Karimov".to_string()),
            featured: false,
            featured_image: None,
            categories: Vec::new(),
            category_docs: Vec::new(),
            content: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Removes the stored slug, leaving the title to derive one from.
    pub fn without_slug(mut self) -> Self {
        self.slug = None;
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Sets the RFC 3339 publish timestamp.
    pub fn published_at(mut self, timestamp: impl Into<String>) -> Self {
        self.published_at = Some(timestamp.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(name.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Adds a category referencing a treatment document.
    pub fn category(mut self, name: &str, slug: &str) -> Self {
        let id = document_id("treatment");
        self.categories
            .push(json!({"_type": "reference", "_ref": id}));
        self.category_docs
            .push(json!({"_id": id, "name": name, "slug": slug}));
        self
    }

    /// Adds a legacy string category such as `root-canal`.
    pub fn legacy_category(mut self, key: &str) -> Self {
        self.categories.push(json!(key));
        self.category_docs.push(Value::Null);
        self
    }

    /// Appends a text block with the given style (`normal`, `h2`, ...).
    pub fn block(mut self, style: &str, text: &str) -> Self {
        self.content.push(json!({
            "_type": "block",
            "_key": document_id("block"),
            "style": style,
            "children": [{"_type": "span", "text": text}]
        }));
        self
    }

    pub fn build(self) -> Value {
        json!({
            "_id": document_id("post"),
            "title": self.title,
            "slug": self.slug,
            "excerpt": self.excerpt,
            "publishedAt": self.published_at,
            "featured": self.featured,
            "author": self.author.map(|name| json!({"name": name, "image": null})),
            "featuredImage": self.featured_image.as_deref().map(image),
            "categories": self.categories,
            "categoryDocs": self.category_docs,
            "content": self.content,
            "seo": null,
        })
    }
}

impl Default for BlogPostFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a published post with default values.
pub fn create_post() -> Value {
    BlogPostFactory::new().build()
}

/// Creates a featured post.
pub fn create_featured_post() -> Value {
    BlogPostFactory::new().featured(true).build()
}
