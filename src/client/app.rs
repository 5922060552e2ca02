use dioxus::prelude::*;

use crate::{
    client::{
        api::load_locales,
        constant::{SITE_DESCRIPTION, SITE_NAME},
        router::Route,
    },
    model::locale::LocalesDto,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Active locales, loaded once for the language switch and the root redirect.
pub type LocalesContext = Resource<Result<LocalesDto, ServerFnError>>;

#[component]
pub fn App() -> Element {
    let locales: LocalesContext = use_server_future(load_locales)?;
    use_context_provider(|| locales);

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
