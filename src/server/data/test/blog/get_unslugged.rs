use super::*;

/// Tests fetching posts that have no stored slug.
///
/// Expected: Ok(Vec) whose slugs derive from titles
#[tokio::test]
async fn gets_posts_without_slug() -> Result<(), ContentError> {
    let test = TestBuilder::new()
        .with_unslugged_posts(
            "en",
            vec![BlogPostFactory::new()
                .title("Veneers: What to Expect")
                .without_slug()
                .build()],
        )
        .build()
        .await
        .unwrap();
    let client = content_client(&test);

    let posts = BlogRepository::new(&client).get_unslugged("en").await?;

    assert_eq!(posts.len(), 1);
    assert!(posts[0].slug.is_none());
    assert_eq!(
        posts[0].resolved_slug().as_deref(),
        Some("veneers-what-to-expect")
    );

    Ok(())
}
