use dioxus::prelude::*;

use crate::client::{component::ContactForm, constant::CONTACT_ANCHOR};

#[component]
pub fn ContactSection(locale: String) -> Element {
    rsx!(section {
        id: CONTACT_ANCHOR,
        class: "py-20 px-4 bg-primary/5",
        div {
            class: "grid gap-10 lg:grid-cols-2 items-center max-w-6xl mx-auto",
            div {
                class: "flex flex-col gap-4",
                h2 { class: "text-3xl md:text-4xl font-bold", "Get your free treatment plan" }
                p {
                    class: "text-lg opacity-80",
                    "Send us your details and a coordinator will prepare a personal plan with prices, travel and accommodation."
                }
            }
            div {
                class: "card bg-base-100 shadow-xl",
                div {
                    class: "card-body",
                    ContactForm { locale }
                }
            }
        }
    })
}
