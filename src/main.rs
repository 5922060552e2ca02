mod client;
mod i18n;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, middleware::locale::locale_redirect, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client()?;
        let content = startup::setup_content_client(&config, http_client.clone())?;
        let locale_cache = startup::setup_locale_cache(&config);

        if config.contact_webhook_url.is_none() {
            tracing::warn!("CONTACT_WEBHOOK_URL is not set, contact inquiries will only be logged");
        }

        tracing::info!(
            "Starting server for dataset '{}' with default locale '{}'",
            config.sanity_dataset,
            config.default_locale
        );

        let state = AppState::new(
            content,
            locale_cache,
            http_client,
            config.contact_webhook_url.clone(),
        );

        // Server functions read the state from the request extensions
        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()?.with_state(state.clone());
        router = router
            .merge(server_routes)
            .layer(axum::Extension(state.clone()))
            .layer(axum::middleware::from_fn_with_state(state, locale_redirect));

        Ok(router)
    })
}
