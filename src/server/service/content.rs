//! Content status service.
//!
//! Reports what the content store holds so editors can spot a missing home
//! page or an empty page before visitors do.

use crate::{
    model::content::ContentStatusDto,
    server::{
        data::{client::ContentClient, locale::LocaleRepository, page::PageRepository},
        error::AppError,
        model::{locale::LocaleSettings, page::PageSummaryDocument},
    },
};

pub struct ContentStatusService<'a> {
    content: &'a ContentClient,
    default_locale: &'a str,
}

impl<'a> ContentStatusService<'a> {
    pub fn new(content: &'a ContentClient, default_locale: &'a str) -> Self {
        Self {
            content,
            default_locale,
        }
    }

    /// Lists every page and the active locales without a home page.
    ///
    /// Unlike page rendering this reads the store directly, bypassing the
    /// locale cache, and reports failures instead of substituting defaults.
    ///
    /// # Returns
    /// - `Ok(ContentStatusDto)` - Pages and missing home pages
    /// - `Err(AppError::ContentErr)` - The store could not be queried
    pub async fn status(&self) -> Result<ContentStatusDto, AppError> {
        let locale_repo = LocaleRepository::new(self.content);
        let page_repo = PageRepository::new(self.content);

        let (locales, pages) = tokio::join!(locale_repo.get_all(), page_repo.get_summaries());
        let settings = LocaleSettings::from_documents(locales?, self.default_locale);
        let pages = pages?;

        let missing_home_pages = settings
            .codes()
            .into_iter()
            .filter(|code| !pages.iter().any(|page| page.is_home_for(code)))
            .map(str::to_string)
            .collect();

        Ok(ContentStatusDto {
            total_pages: pages.len(),
            pages: pages
                .into_iter()
                .map(PageSummaryDocument::into_dto)
                .collect(),
            missing_home_pages,
        })
    }
}
