use super::*;

/// Tests listing page summaries.
///
/// Expected: Ok(Vec) with section counts
#[tokio::test]
async fn lists_pages() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_page_summaries(vec![
            factory::create_page_summary("home-en", "en", 6),
            factory::create_page_summary("home-ru", "ru", 0),
        ])
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let pages = PageRepository::new(&client).get_summaries().await?;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].sections_count, Some(6));
    assert!(pages[1].is_home_for("ru"));

    Ok(())
}
