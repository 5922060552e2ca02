//! Test utilities for the content-backed site.
//!
//! Provides a mock content store for repository, service and router tests. The
//! store is a `wiremock` server that answers GROQ queries the same way the real
//! query API does, wrapping every answer as `{"result": ...}` and answering
//! `null` to queries nothing was registered for.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder that registers documents per query
//! - **TestContext**: Running mock server plus request inspection helpers
//! - **factory**: Builders for locale, page, section and blog post documents
//! - **matcher**: `wiremock` matchers for GROQ text and parameters
//! - **TestError**: Errors raised while inspecting recorded requests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn loads_home_page() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_locales(vec![factory::create_locale("en")])
//!         .with_page("home", "en", factory::create_page("home-en", "en"))
//!         .build()
//!         .await?;
//!
//!     let client = ContentClient::with_base_url(http, &test.uri(), "2024-01-01", "production", None)?;
//!     // Run queries against the mock store...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod matcher;
