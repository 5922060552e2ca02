use crate::server::{
    data::{client::ContentClient, query},
    error::content::ContentError,
    model::locale::LocaleDocument,
};

pub struct LocaleRepository<'a> {
    content: &'a ContentClient,
}

impl<'a> LocaleRepository<'a> {
    pub fn new(content: &'a ContentClient) -> Self {
        Self { content }
    }

    /// Gets every locale document, active or not, default first.
    pub async fn get_all(&self) -> Result<Vec<LocaleDocument>, ContentError> {
        let documents: Option<Vec<LocaleDocument>> =
            self.content.fetch(&query::locales(), &[]).await?;

        Ok(documents.unwrap_or_default())
    }
}
