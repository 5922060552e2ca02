use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        section::{ContactSection, LatestPostsSection, Section},
        HomePageContext,
    },
    constant::SITE_NAME,
    model::cache::Cache,
};

/// Landing page of a locale: the CMS sections in page order, then the latest
/// posts and the contact form.
#[component]
pub fn Home(locale: String) -> Element {
    let home_page = use_context::<HomePageContext>();

    let page = match Cache::from_resource(home_page()) {
        Cache::Error(error) => {
            return rsx!(ErrorPage {
                status: error.status,
                message: error.message
            })
        }
        // A page still held for the previous locale counts as loading
        Cache::Fetched(page) if page.locale == locale => page,
        _ => return rsx!(LoadingPage {}),
    };

    let seo = page.seo.clone().unwrap_or_default();
    let title = seo
        .meta_title
        .or_else(|| page.title.clone())
        .unwrap_or_else(|| SITE_NAME.to_string());

    rsx! {
        Title { "{title}" }
        if let Some(description) = seo.meta_description {
            document::Meta { name: "description", content: description }
        }
        for (index, section) in page.sections.into_iter().enumerate() {
            Section { key: "{index}", section }
        }
        LatestPostsSection { locale: locale.clone() }
        ContactSection { locale }
    }
}
