//! Page documents and their composition into a renderable page.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{
        content::PageStatusDto,
        page::{PageDto, SeoDto},
    },
    server::{
        model::{
            footer::FooterDocument,
            section::{compose_sections, fixed_nav_links, nav_links},
        },
        util::{serde::nullable, text::non_empty},
    },
};

/// Slug of the page rendered at `/{locale}`.
pub const HOME_SLUG: &str = "home";

#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Locale code, from either the locale reference or a legacy string.
    pub locale: Option<String>,
    pub seo: Option<SeoDocument>,
    pub footer: Option<FooterDocument>,
    /// Raw section objects, decoded individually during composition.
    #[serde(default, deserialize_with = "nullable")]
    pub sections: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDocument {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl SeoDocument {
    pub fn into_dto(self) -> Option<SeoDto> {
        let seo = SeoDto {
            meta_title: non_empty(self.meta_title),
            meta_description: non_empty(self.meta_description),
        };

        (seo != SeoDto::default()).then_some(seo)
    }
}

impl PageDocument {
    /// Composes the page for display under `/{locale}`.
    ///
    /// `locale` is the locale the visitor asked for. It can differ from the
    /// document's own locale when the page fell back to the default language;
    /// links keep pointing at the visitor's locale.
    pub fn into_dto(self, locale: &str, slug: &str) -> PageDto {
        let sections = compose_sections(self.sections);
        let nav_links = nav_links(&sections, locale);

        PageDto {
            locale: locale.to_string(),
            slug: slug.to_string(),
            title: non_empty(self.title),
            seo: self.seo.and_then(SeoDocument::into_dto),
            nav_links,
            sections: sections.into_iter().map(|s| s.section).collect(),
            footer: self.footer.and_then(FooterDocument::into_dto),
        }
    }
}

/// Page with no content, served when nothing could be loaded.
pub fn empty_page(locale: &str, slug: &str) -> PageDto {
    PageDto {
        locale: locale.to_string(),
        slug: slug.to_string(),
        title: None,
        seo: None,
        nav_links: fixed_nav_links(locale).to_vec(),
        sections: Vec::new(),
        footer: None,
    }
}

/// Page listing row used by the content status endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummaryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub sections_count: Option<u32>,
}

impl PageSummaryDocument {
    /// Whether this is the home page of `locale`, in either slug form.
    pub fn is_home_for(&self, locale: &str) -> bool {
        let slug_matches = self.slug.as_deref().is_some_and(|slug| {
            slug == HOME_SLUG || slug == crate::model::slug::locale_slug(HOME_SLUG, locale)
        });

        slug_matches && self.locale.as_deref() == Some(locale)
    }

    pub fn into_dto(self) -> PageStatusDto {
        PageStatusDto {
            id: self.id,
            title: non_empty(self.title),
            slug: self.slug,
            locale: self.locale,
            sections_count: self.sections_count.unwrap_or(0),
        }
    }
}
