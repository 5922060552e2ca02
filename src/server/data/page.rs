use serde_json::json;

use crate::{
    model::slug::locale_slug,
    server::{
        data::{client::ContentClient, query},
        error::content::ContentError,
        model::page::{PageDocument, PageSummaryDocument},
    },
};

pub struct PageRepository<'a> {
    content: &'a ContentClient,
}

impl<'a> PageRepository<'a> {
    pub fn new(content: &'a ContentClient) -> Self {
        Self { content }
    }

    /// Finds the page with `slug` in `locale`.
    ///
    /// Matches both the bare slug (`home`) and the per-locale form
    /// (`home-en`) editors use to keep slugs unique across languages.
    ///
    /// # Arguments
    /// - `slug` - Bare page slug
    /// - `locale` - Locale code the page is written in
    ///
    /// # Returns
    /// - `Ok(Some(PageDocument))` - Most recently updated matching page
    /// - `Ok(None)` - No page with that slug in that locale
    /// - `Err(ContentError)` - Query failed
    pub async fn find_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<PageDocument>, ContentError> {
        self.content
            .fetch(
                &query::page_by_slug(),
                &[
                    ("slug", json!(slug)),
                    ("localizedSlug", json!(locale_slug(slug, locale))),
                    ("locale", json!(locale)),
                ],
            )
            .await
    }

    /// Gets a listing row for every page in every locale.
    pub async fn get_summaries(&self) -> Result<Vec<PageSummaryDocument>, ContentError> {
        let summaries: Option<Vec<PageSummaryDocument>> =
            self.content.fetch(&query::page_summaries(), &[]).await?;

        Ok(summaries.unwrap_or_default())
    }
}
