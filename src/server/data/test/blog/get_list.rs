use super::*;

/// Tests listing posts for a locale.
///
/// Expected: Ok(Vec) with every post in store order
#[tokio::test]
async fn lists_posts_for_locale() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_posts(
            "en",
            vec![
                BlogPostFactory::new().title("Newest").build(),
                BlogPostFactory::new().title("Older").build(),
            ],
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let posts = BlogRepository::new(&client).get_list("en", false).await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title.as_deref(), Some("Newest"));

    Ok(())
}

/// Tests the featured filter.
///
/// Expected: Ok(Vec) with only the featured posts
#[tokio::test]
async fn filters_featured_posts() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_posts(
            "ru",
            vec![
                factory::create_featured_post(),
                factory::create_post(),
                factory::create_featured_post(),
                factory::create_featured_post(),
            ],
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let posts = BlogRepository::new(&client)
        .get_list("ru", true)
        .await?;

    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| p.featured == Some(true)));

    Ok(())
}

/// Tests a locale with no posts.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_locale_without_posts() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_posts("en", vec![factory::create_post()])
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let posts = BlogRepository::new(&client).get_list("uz", false).await?;

    assert!(posts.is_empty());

    Ok(())
}
