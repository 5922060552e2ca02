use super::*;

use test_utils::factory::{page::PageFactory, section::SectionFactory};

use crate::{
    model::section::SectionDto,
    server::service::page::PageService,
};

/// Tests loading a page in the requested locale.
///
/// Verifies that sections are composed in order and navigation links carry
/// the visitor's locale.
///
/// Expected: page with hero and process sections
#[tokio::test]
async fn loads_page_in_requested_locale() {
    let test = builder_with_locales()
        .with_page(
            "home",
            "ru",
            PageFactory::new("home-ru", "ru")
                .title("Главная")
                .section(SectionFactory::hero().build())
                .section(SectionFactory::process().nav_title("Процесс").build())
                .build(),
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home", Some("ru")).await;

    assert_eq!(page.locale, "ru");
    assert_eq!(page.title.as_deref(), Some("Главная"));
    assert!(matches!(page.sections[0], SectionDto::Hero(_)));
    assert!(matches!(page.sections[1], SectionDto::Process(_)));
    let hrefs: Vec<_> = page.nav_links.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(hrefs, vec!["#process", "/ru/blog", "#contact"]);
}

/// Tests the fallback to the default locale's page.
///
/// Expected: English content linked under `/ru`
#[tokio::test]
async fn falls_back_to_default_locale_page() {
    let test = builder_with_locales()
        .with_page(
            "home",
            "en",
            PageFactory::new("home-en", "en")
                .title("Home")
                .section(SectionFactory::gallery().build())
                .build(),
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home", Some("ru")).await;

    assert_eq!(page.locale, "ru");
    assert_eq!(page.title.as_deref(), Some("Home"));
    assert_eq!(page.sections.len(), 1);
    assert_eq!(page.nav_links[0].href, "/ru/blog");
}

/// Tests an unsupported locale.
///
/// Expected: default locale page
#[tokio::test]
async fn resolves_unsupported_locale_to_default() {
    let test = builder_with_locales()
        .with_page("home", "en", PageFactory::new("home-en", "en").title("Home").build())
        .build()
        .await
        .unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home", Some("fr")).await;

    assert_eq!(page.locale, "en");
    assert_eq!(page.title.as_deref(), Some("Home"));
}

/// Tests a page that exists in no locale.
///
/// Expected: empty page with the fixed navigation links
#[tokio::test]
async fn returns_empty_page_when_missing() {
    let test = builder_with_locales().build().await.unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home", None).await;

    assert_eq!(page.locale, "en");
    assert!(page.sections.is_empty());
    assert_eq!(page.nav_links.len(), 2);
}

/// Tests a content store that is down.
///
/// Verifies that both the locale and page queries failing still produce a
/// page in the configured default locale.
///
/// Expected: empty page in `en`
#[tokio::test]
async fn returns_empty_page_when_store_fails() {
    let test = TestBuilder::new()
        .with_failure("*[", 502)
        .build()
        .await
        .unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home", Some("ru")).await;

    assert_eq!(page.locale, "en");
    assert!(page.sections.is_empty());
    assert!(page.footer.is_none());
}

/// Tests that inactive and empty sections are left out.
///
/// Expected: only the testimonials section remains
#[tokio::test]
async fn omits_inactive_and_empty_sections() {
    let test = builder_with_locales()
        .with_page(
            "home",
            "en",
            PageFactory::new("home-en", "en")
                .section(SectionFactory::process().active(false).build())
                .section(SectionFactory::new("gallerySection").build())
                .section(SectionFactory::testimonials().anchor("reviews").build())
                .build(),
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);
    let cache = locale_cache();

    let page = PageService::new(&client, &cache).get("home-en", Some("en")).await;

    assert_eq!(page.slug, "home");
    assert_eq!(page.sections.len(), 1);
    assert_eq!(page.sections[0].anchor(), "reviews");
}
