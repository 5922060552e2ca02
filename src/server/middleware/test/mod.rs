use std::time::Duration;

use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    data::client::ContentClient,
    middleware::locale::{
        cookie_value, locale_cookie, resolve_request, should_bypass, LocaleDecision,
    },
    model::locale::{Locale, LocaleSettings},
    service::locale::LocaleCache,
    state::AppState,
};

mod locale;
mod redirect;

/// Active `en` (default), `ru` and `uz` locales.
fn settings() -> LocaleSettings {
    let locale = |code: &str| Locale {
        code: code.to_string(),
        name: code.to_uppercase(),
        flag: None,
    };

    LocaleSettings {
        default_locale: "en".to_string(),
        locales: vec![locale("en"), locale("ru"), locale("uz")],
    }
}

fn redirect(location: &str, locale: &str) -> LocaleDecision {
    LocaleDecision::Redirect {
        location: location.to_string(),
        locale: locale.to_string(),
    }
}

/// Mock store with active `en` (default) and `ru` locales.
async fn store_with_locales() -> TestContext {
    TestBuilder::new()
        .with_locales(vec![
            factory::create_default_locale("en"),
            factory::create_locale("ru"),
        ])
        .build()
        .await
        .unwrap()
}

fn app_state(test: &TestContext) -> AppState {
    let content = ContentClient::with_base_url(
        reqwest::Client::new(),
        &test.uri(),
        "2024-01-01",
        "production",
        None,
    )
    .unwrap();

    AppState::new(
        content,
        LocaleCache::new(Duration::from_secs(60), "en"),
        reqwest::Client::new(),
        None,
    )
}
