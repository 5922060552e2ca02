use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCheck, Icon};

use super::{background_style, SectionHeader};
use crate::model::section::AdditionalServicesSectionDto;

#[component]
pub fn AdditionalServicesSection(section: AdditionalServicesSectionDto) -> Element {
    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4",
        div {
            class: "max-w-7xl mx-auto",
            if let Some(badge) = &section.badge_text {
                div {
                    class: "flex justify-center mb-4",
                    span { class: "badge badge-primary badge-lg", "{badge}" }
                }
            }
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for service in section.services.iter() {
                    div {
                        class: "flex gap-4 p-6 rounded-box bg-base-100 shadow-sm",
                        div {
                            class: "shrink-0 w-12 h-12 rounded-lg flex items-center justify-center bg-primary/10",
                            style: background_style(&service.icon_bg_color),
                            if let Some(icon) = &service.icon {
                                img { class: "w-7 h-7", src: "{icon.url}", alt: icon.alt_or(&service.title) }
                            } else {
                                Icon { width: 20, height: 20, icon: FaCheck }
                            }
                        }
                        div {
                            class: "flex flex-col gap-1",
                            div {
                                class: "flex items-center gap-2",
                                h3 { class: "font-semibold", "{service.title}" }
                                if service.included {
                                    span { class: "badge badge-success badge-sm", "Included" }
                                }
                            }
                            if let Some(description) = &service.description {
                                p { class: "text-sm opacity-80", "{description}" }
                            }
                        }
                    }
                }
            }
            if !section.info_cards.is_empty() {
                div {
                    class: "grid gap-6 md:grid-cols-2 mt-10",
                    for card in section.info_cards.iter() {
                        div {
                            class: "flex gap-4 p-6 rounded-box bg-primary/10",
                            style: background_style(&card.bg_color),
                            if let Some(icon) = &card.icon {
                                img { class: "w-10 h-10 shrink-0", src: "{icon.url}", alt: icon.alt_or(&card.title) }
                            }
                            div {
                                h3 { class: "font-semibold mb-1", "{card.title}" }
                                if let Some(description) = &card.description {
                                    p { class: "text-sm opacity-80", "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
