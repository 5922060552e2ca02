use super::*;

use test_utils::factory::{page::PageFactory, section::SectionFactory};

/// Tests finding a page by slug and locale.
///
/// Verifies that the bare slug, the per-locale slug and the locale are all
/// sent as query parameters and that the page decodes with its sections.
///
/// Expected: Ok(Some(PageDocument))
#[tokio::test]
async fn finds_page_with_sections() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_page(
            "home",
            "ru",
            PageFactory::new("home-ru", "ru")
                .title("Главная")
                .section(SectionFactory::hero().build())
                .section(SectionFactory::process().build())
                .build(),
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let page = PageRepository::new(&client)
        .find_by_slug("home", "ru")
        .await?
        .expect("page should exist");

    assert_eq!(page.slug.as_deref(), Some("home-ru"));
    assert_eq!(page.locale.as_deref(), Some("ru"));
    assert_eq!(page.sections.len(), 2);
    assert_eq!(
        test.param_values("localizedSlug").await.unwrap(),
        vec![json!("home-ru")]
    );

    Ok(())
}

/// Tests looking up a page that does not exist in the requested locale.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_locale() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_page("home", "en", factory::create_page("home-en", "en"))
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let page = PageRepository::new(&client).find_by_slug("home", "uz").await?;

    assert!(page.is_none());

    Ok(())
}
