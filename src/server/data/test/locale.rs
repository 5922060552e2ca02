use super::*;

use crate::server::data::locale::LocaleRepository;

/// Tests fetching all locale documents.
///
/// Verifies that inactive locales are returned too; filtering happens when
/// building locale settings.
///
/// Expected: Ok(Vec) with every document
#[tokio::test]
async fn gets_all_locales() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_locales(vec![
            factory::create_default_locale("en"),
            factory::create_locale("ru"),
            factory::locale::LocaleFactory::new("de").active(false).build(),
        ])
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let locales = LocaleRepository::new(&client).get_all().await?;

    assert_eq!(locales.len(), 3);
    assert_eq!(locales[0].code.as_deref(), Some("en"));
    assert_eq!(locales[0].is_default, Some(true));
    assert_eq!(locales[2].is_active, Some(false));

    Ok(())
}

/// Tests a store with no locale documents.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_store_has_none() -> Result<(), ContentError> {
    let test = TestBuilder::new().build().await.unwrap();
    let client = content_client(&test);

    let locales = LocaleRepository::new(&client).get_all().await?;

    assert!(locales.is_empty());

    Ok(())
}

/// Tests that store failures are propagated.
///
/// Expected: Err(ContentError::Status)
#[tokio::test]
async fn propagates_failures() {
    let test = TestBuilder::new()
        .with_failure(r#"_type == "locale""#, 500)
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let result = LocaleRepository::new(&client).get_all().await;

    assert!(matches!(result, Err(ContentError::Status { status: 500, .. })));
}
