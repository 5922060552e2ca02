use super::*;

use crate::server::{error::AppError, service::content::ContentStatusService};

/// Tests reporting pages and missing home pages.
///
/// Expected: Ok with `ru` missing its home page
#[tokio::test]
async fn reports_missing_home_pages() -> Result<(), AppError> {
    let test = builder_with_locales()
        .with_page_summaries(vec![
            factory::create_page_summary("home-en", "en", 5),
            factory::create_page_summary("about-ru", "ru", 2),
        ])
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let status = ContentStatusService::new(&client, "en").status().await?;

    assert_eq!(status.total_pages, 2);
    assert_eq!(status.pages[0].sections_count, 5);
    assert_eq!(status.missing_home_pages, vec!["ru".to_string()]);

    Ok(())
}

/// Tests that store failures are reported.
///
/// Expected: Err(AppError::ContentErr)
#[tokio::test]
async fn reports_store_failure() {
    let test = builder_with_locales()
        .with_failure("count(sections)", 500)
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let result = ContentStatusService::new(&client, "en").status().await;

    assert!(matches!(result, Err(AppError::ContentErr(_))));
}
