use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, Request, Respond, ResponseTemplate,
};

use crate::{
    context::TestContext,
    error::TestError,
    matcher::{groq_param, query_contains, query_text},
};

const QUERY_PATH: &str = r"^/v[^/]+/data/query/[^/]+$";

/// Builder for a mock content store preloaded with documents.
///
/// Each `with_*` method registers the documents one kind of GROQ query should
/// return. Documents are plain JSON in the projected shape the site's queries
/// produce; the `factory` module builds them. Queries with no registered
/// answer get `{"result": null}`, which is what the real store returns for a
/// `[0]` lookup that matches nothing.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_locales(vec![factory::create_locale("en"), factory::create_locale("ru")])
///     .with_posts("en", vec![factory::create_post()])
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Mocks mounted in order during `build()`.
    mocks: Vec<Mock>,
}

impl TestBuilder {
    /// Creates a builder with no documents registered.
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Registers the `locale` documents returned by the locale query.
    ///
    /// # Arguments
    /// - `locales` - Locale documents, see `factory::locale`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_locales(mut self, locales: Vec<Value>) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains(r#"_type == "locale""#))
                .respond_with(result(Value::Array(locales))),
        );
        self
    }

    /// Registers the page returned for `slug` in `locale`.
    ///
    /// # Arguments
    /// - `slug` - Bare slug the page is requested by, e.g. `home`
    /// - `locale` - Locale code the page is requested in
    /// - `page` - Page document, see `factory::page`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_page(mut self, slug: &str, locale: &str, page: Value) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains(r#"_type == "page" && slug.current in"#))
                .and(groq_param("slug", slug))
                .and(groq_param("locale", locale))
                .respond_with(result(page)),
        );
        self
    }

    /// Registers the rows returned by the page listing query.
    pub fn with_page_summaries(mut self, summaries: Vec<Value>) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains("count(sections)"))
                .respond_with(result(Value::Array(summaries))),
        );
        self
    }

    /// Registers the posts listed for `locale`.
    ///
    /// The mock honors the query's `featured == true` filter, so the same
    /// fixture serves both the blog index and the featured strip.
    pub fn with_posts(mut self, locale: &str, posts: Vec<Value>) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains(r#"_type == "blogPost" && (locale"#))
                .and(groq_param("locale", locale))
                .respond_with(PostList { posts }),
        );
        self
    }

    /// Registers the post returned for a stored `slug` in `locale`.
    pub fn with_post(mut self, slug: &str, locale: &str, post: Value) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains("slug.current == $slug"))
                .and(groq_param("slug", slug))
                .and(groq_param("locale", locale))
                .respond_with(result(post)),
        );
        self
    }

    /// Registers the posts in `locale` that have no stored slug.
    pub fn with_unslugged_posts(mut self, locale: &str, posts: Vec<Value>) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains("!defined(slug.current)"))
                .and(groq_param("locale", locale))
                .respond_with(result(Value::Array(posts))),
        );
        self
    }

    /// Makes every query containing `fragment` fail with `status`.
    ///
    /// Failures take precedence over documents registered for the same query.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_failure(r#"_type == "locale""#, 503)
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_failure(mut self, fragment: &str, status: u16) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path_regex(QUERY_PATH))
                .and(query_contains(fragment))
                .respond_with(
                    ResponseTemplate::new(status)
                        .set_body_json(json!({"error": {"description": "mock failure"}})),
                )
                .with_priority(1),
        );
        self
    }

    /// Starts the mock server and mounts every registered mock.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock content store
    /// - `Err(TestError)` - Setup failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await;

        for mock in self.mocks {
            mock.mount(&context.server).await;
        }

        Mock::given(method("GET"))
            .and(path_regex(QUERY_PATH))
            .respond_with(result(Value::Null))
            .with_priority(u8::MAX)
            .mount(&context.server)
            .await;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Query API envelope around `value`.
fn result(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ms": 1, "result": value}))
}

/// Answers post list queries, applying the featured filter found in the
/// GROQ text.
struct PostList {
    posts: Vec<Value>,
}

impl Respond for PostList {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let query = query_text(request).unwrap_or_default();
        let featured_only = query.contains("featured == true");

        let posts: Vec<Value> = self
            .posts
            .iter()
            .filter(|post| !featured_only || post["featured"] == Value::Bool(true))
            .cloned()
            .collect();

        result(Value::Array(posts))
    }
}
