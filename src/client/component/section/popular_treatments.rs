use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaClock, Icon};

use super::SectionHeader;
use crate::model::section::PopularTreatmentsSectionDto;

#[component]
pub fn PopularTreatmentsSection(section: PopularTreatmentsSectionDto) -> Element {
    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4",
        div {
            class: "max-w-7xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for treatment in section.treatments.iter() {
                    div {
                        class: "card bg-base-100 shadow-md overflow-hidden",
                        if let Some(image) = &treatment.image {
                            figure {
                                class: "relative aspect-[4/3]",
                                img {
                                    class: "w-full h-full object-cover",
                                    src: "{image.url}",
                                    alt: image.alt_or(&treatment.name),
                                    loading: "lazy",
                                }
                                if let Some(badge) = &treatment.badge {
                                    span { class: "badge badge-accent absolute top-3 left-3", "{badge}" }
                                }
                            }
                        }
                        div {
                            class: "card-body gap-3",
                            h3 { class: "card-title", "{treatment.name}" }
                            if let Some(description) = &treatment.short_description {
                                p { class: "opacity-80", "{description}" }
                            }
                            div {
                                class: "flex items-center justify-between mt-auto pt-2",
                                if let Some(price) = &treatment.starting_price {
                                    span { class: "text-xl font-bold text-primary", "{price}" }
                                }
                                if let Some(duration) = &treatment.duration {
                                    span {
                                        class: "flex items-center gap-1 text-sm opacity-70",
                                        Icon { width: 14, height: 14, icon: FaClock }
                                        "{duration}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
