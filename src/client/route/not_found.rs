use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Page not found | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center px-4",
            p { class: "text-6xl font-bold", "404" }
            p { class: "text-lg opacity-80", "The page you are looking for does not exist." }
            Link { to: Route::Root {}, class: "btn btn-primary", "Back to home" }
        }
    }
}
