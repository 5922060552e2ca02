use dioxus::prelude::*;

use super::{background_style, SectionHeader};
use crate::model::section::FeatureCardsSectionDto;

#[component]
pub fn FeatureCardsSection(section: FeatureCardsSectionDto) -> Element {
    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-7xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                for item in section.items.iter() {
                    div {
                        class: "card bg-base-100 shadow-sm",
                        div {
                            class: "card-body gap-3",
                            if let Some(icon) = &item.icon {
                                div {
                                    class: "w-14 h-14 rounded-xl flex items-center justify-center bg-primary/10",
                                    style: background_style(&item.icon_bg_color),
                                    img { class: "w-8 h-8", src: "{icon.url}", alt: icon.alt_or(&item.title) }
                                }
                            }
                            div {
                                class: "flex items-center gap-2",
                                h3 { class: "card-title text-lg", "{item.title}" }
                                if let Some(badge) = &item.badge {
                                    span { class: "badge badge-secondary", "{badge}" }
                                }
                            }
                            if let Some(description) = &item.description {
                                p { class: "opacity-80", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    })
}
