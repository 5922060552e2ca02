use dioxus::prelude::*;

use crate::client::{app::LocalesContext, component::page::LoadingPage, router::Route};

/// `/` without a locale.
///
/// The server already redirects this path; this covers client-side
/// navigation by replacing the route with the default locale's home page.
#[component]
pub fn Root() -> Element {
    let locales = use_context::<LocalesContext>();
    let nav = navigator();

    use_effect(move || {
        let default_locale = locales
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|l| l.default_locale.clone());
        if let Some(default_locale) = default_locale {
            nav.replace(Route::Home {
                locale: default_locale,
            });
        }
    });

    rsx!(LoadingPage {})
}
