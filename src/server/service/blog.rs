//! Blog service for listing and reading posts.

use dioxus_logger::tracing;

use crate::{
    model::blog::{BlogPostDto, BlogPostSummaryDto},
    server::{
        data::{blog::BlogRepository, client::ContentClient},
        error::AppError,
        model::blog::BlogPostDocument,
    },
};

/// Posts shown in the latest-posts block of the home page.
pub const HOME_POST_LIMIT: usize = 4;
/// Upper bound for featured post listings.
pub const FEATURED_POST_LIMIT: usize = 3;

pub struct BlogService<'a> {
    content: &'a ContentClient,
}

impl<'a> BlogService<'a> {
    pub fn new(content: &'a ContentClient) -> Self {
        Self { content }
    }

    /// Lists posts in `locale`, newest first.
    ///
    /// Featured listings return at most [`FEATURED_POST_LIMIT`] posts. Posts
    /// without a usable slug are skipped before the limit is applied, so they
    /// never take a slot. Store failures are logged and yield an empty list.
    ///
    /// # Arguments
    /// - `locale` - Resolved locale code
    /// - `limit` - Maximum number of posts, all when `None`
    /// - `featured_only` - Only list posts flagged as featured
    pub async fn list(
        &self,
        locale: &str,
        limit: Option<usize>,
        featured_only: bool,
    ) -> Vec<BlogPostSummaryDto> {
        let limit = if featured_only {
            Some(limit.map_or(FEATURED_POST_LIMIT, |n| n.min(FEATURED_POST_LIMIT)))
        } else {
            limit
        };

        match BlogRepository::new(self.content)
            .get_list(locale, featured_only)
            .await
        {
            Ok(posts) => posts
                .into_iter()
                .filter_map(BlogPostDocument::into_summary_dto)
                .take(limit.unwrap_or(usize::MAX))
                .collect(),
            Err(e) => {
                tracing::error!("Failed to fetch blog posts for '{}': {}", locale, e);
                Vec::new()
            }
        }
    }

    /// Gets a single post by its public slug.
    ///
    /// Looks the slug up as stored first, then among posts whose slug is
    /// derived from their title.
    ///
    /// # Returns
    /// - `Ok(BlogPostDto)` - The post with its content
    /// - `Err(AppError::NotFound)` - No such post, or the store could not be reached
    pub async fn get(&self, slug: &str, locale: &str) -> Result<BlogPostDto, AppError> {
        let repo = BlogRepository::new(self.content);

        let document = match repo.find_by_slug(slug, locale).await {
            Ok(Some(document)) => Some(document),
            Ok(None) => match repo.get_unslugged(locale).await {
                Ok(posts) => posts
                    .into_iter()
                    .find(|post| post.resolved_slug().as_deref() == Some(slug)),
                Err(e) => {
                    tracing::error!("Failed to search unslugged posts for '{}': {}", locale, e);
                    None
                }
            },
            Err(e) => {
                tracing::error!("Failed to fetch blog post '{}' ({}): {}", slug, locale, e);
                None
            }
        };

        document
            .and_then(BlogPostDocument::into_dto)
            .ok_or_else(|| AppError::NotFound(format!("Blog post '{}' not found", slug)))
    }
}
