use serde_json::json;

use crate::server::{
    data::{client::ContentClient, query},
    error::content::ContentError,
    model::blog::BlogPostDocument,
};

pub struct BlogRepository<'a> {
    content: &'a ContentClient,
}

impl<'a> BlogRepository<'a> {
    pub fn new(content: &'a ContentClient) -> Self {
        Self { content }
    }

    /// Gets posts written in `locale`, newest first.
    ///
    /// # Arguments
    /// - `locale` - Locale code of the posts
    /// - `featured_only` - Restrict to posts flagged as featured
    ///
    /// # Returns
    /// - `Ok(Vec<BlogPostDocument>)` - Matching posts, possibly empty
    /// - `Err(ContentError)` - Query failed
    pub async fn get_list(
        &self,
        locale: &str,
        featured_only: bool,
    ) -> Result<Vec<BlogPostDocument>, ContentError> {
        let posts: Option<Vec<BlogPostDocument>> = self
            .content
            .fetch(
                &query::posts(featured_only),
                &[("locale", json!(locale))],
            )
            .await?;

        Ok(posts.unwrap_or_default())
    }

    /// Finds a post by its stored slug.
    pub async fn find_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<BlogPostDocument>, ContentError> {
        self.content
            .fetch(
                &query::post_by_slug(),
                &[("slug", json!(slug)), ("locale", json!(locale))],
            )
            .await
    }

    /// Gets full posts in `locale` that have no stored slug.
    pub async fn get_unslugged(&self, locale: &str) -> Result<Vec<BlogPostDocument>, ContentError> {
        let posts: Option<Vec<BlogPostDocument>> = self
            .content
            .fetch(&query::posts_without_slug(), &[("locale", json!(locale))])
            .await?;

        Ok(posts.unwrap_or_default())
    }
}
