use std::time::Duration;

use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{data::client::ContentClient, service::locale::LocaleCache, state::AppState};

mod content;
mod page;
mod view;

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

fn locale_cache() -> LocaleCache {
    LocaleCache::new(Duration::from_secs(60), "en")
}

/// Builder preloaded with active `en` (default) and `ru` locales.
fn builder_with_locales() -> TestBuilder {
    TestBuilder::new().with_locales(vec![
        factory::create_default_locale("en"),
        factory::create_locale("ru"),
    ])
}

fn app_state(test: &TestContext) -> AppState {
    AppState::new(content_client(test), locale_cache(), reqwest::Client::new(), None)
}
