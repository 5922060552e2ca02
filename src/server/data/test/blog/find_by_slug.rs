use super::*;

/// Tests finding a post by its stored slug.
///
/// Expected: Ok(Some(BlogPostDocument)) with content blocks
#[tokio::test]
async fn finds_post() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_post(
            "implants-guide",
            "en",
            BlogPostFactory::new()
                .title("Implants guide")
                .slug("implants-guide")
                .block("h2", "Why Tashkent")
                .block("normal", "Prices are lower.")
                .category("Dental Implants", "dental-implants")
                .build(),
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let post = BlogRepository::new(&client)
        .find_by_slug("implants-guide", "en")
        .await?
        .expect("post should exist");

    assert_eq!(post.content.len(), 2);
    assert_eq!(post.categories.len(), 1);
    assert_eq!(post.category_docs.len(), 1);

    Ok(())
}

/// Tests a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), ContentError> {
    let test = TestBuilder::new().build().await.unwrap();
    let client = content_client(&test);

    let post = BlogRepository::new(&client)
        .find_by_slug("missing", "en")
        .await?;

    assert!(post.is_none());

    Ok(())
}
