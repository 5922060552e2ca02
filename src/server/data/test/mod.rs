use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{data::client::ContentClient, error::content::ContentError};

mod blog;
mod client;
mod locale;
mod page;

/// Content client pointed at the mock store.
fn content_client(test: &TestContext) -> ContentClient {
    ContentClient::with_base_url(
        reqwest::Client::new(),
        &test.uri(),
        "2024-01-01",
        "production",
        None,
    )
    .unwrap()
}
