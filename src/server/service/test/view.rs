use super::*;

use test_utils::factory::{blog_post::BlogPostFactory, page::PageFactory, section::SectionFactory};

use crate::{model::section::SectionDto, server::service::view::ViewService};

/// Tests loading the home page for server rendering.
///
/// Expected: sections and SEO title of the requested locale
#[tokio::test]
async fn loads_home_page_with_sections() {
    let test = builder_with_locales()
        .with_page(
            "home",
            "ru",
            PageFactory::new("home-ru", "ru")
                .seo("Лечение зубов в Ташкенте", "Клиники и цены")
                .section(SectionFactory::hero().build())
                .build(),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let page = ViewService::new(&state).page("home", "ru").await;

    assert_eq!(page.locale, "ru");
    assert!(matches!(page.sections[0], SectionDto::Hero(_)));
    let seo = page.seo.unwrap_or_default();
    assert_eq!(seo.meta_title.as_deref(), Some("Лечение зубов в Ташкенте"));
}

/// Tests that post listings resolve an inactive locale to the default.
///
/// Expected: the English posts, limited
#[tokio::test]
async fn lists_default_locale_posts_for_inactive_locale() {
    let posts = (0..3).map(|_| factory::create_post()).collect();
    let test = builder_with_locales()
        .with_posts("en", posts)
        .build()
        .await
        .unwrap();
    let state = app_state(&test);

    let posts = ViewService::new(&state).posts("de", Some(2)).await;

    assert_eq!(posts.len(), 2);
}

/// Tests reading a post for server rendering.
///
/// Expected: Some(BlogPostDto) for a known slug, None otherwise
#[tokio::test]
async fn reads_post_or_nothing() {
    let test = builder_with_locales()
        .with_post(
            "veneers-guide",
            "ru",
            BlogPostFactory::new()
                .title("Виниры")
                .slug("veneers-guide")
                .block("normal", "Всё о винирах")
                .build(),
        )
        .build()
        .await
        .unwrap();
    let state = app_state(&test);
    let view = ViewService::new(&state);

    let post = view.post("veneers-guide", "ru").await;
    assert_eq!(post.map(|p| p.summary.title), Some("Виниры".to_string()));

    assert!(view.post("missing", "ru").await.is_none());
}

/// Tests the locales offered by the language switch.
///
/// Expected: default locale first
#[tokio::test]
async fn lists_active_locales() {
    let test = builder_with_locales().build().await.unwrap();
    let state = app_state(&test);

    let locales = ViewService::new(&state).locales().await;

    assert_eq!(locales.default_locale, "en");
    assert_eq!(locales.codes(), vec!["en", "ru"]);
}
