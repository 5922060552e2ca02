use dioxus::prelude::*;

use super::SectionHeader;
use crate::model::section::ProcessSectionDto;

#[component]
pub fn ProcessSection(section: ProcessSectionDto) -> Element {
    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-6xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            ol {
                class: "grid gap-8 md:grid-cols-2 lg:grid-cols-4",
                for (index, step) in section.steps.iter().enumerate() {
                    li {
                        class: "flex flex-col items-center text-center gap-3",
                        div {
                            class: "relative w-16 h-16 rounded-full bg-primary text-primary-content flex items-center justify-center",
                            if let Some(icon) = &step.icon {
                                img { class: "w-8 h-8", src: "{icon.url}", alt: icon.alt_or(&step.title) }
                            } else {
                                span { class: "text-2xl font-bold", "{index + 1}" }
                            }
                        }
                        h3 { class: "text-lg font-semibold", "{step.title}" }
                        if let Some(description) = &step.description {
                            p { class: "opacity-80", "{description}" }
                        }
                    }
                }
            }
        }
    })
}
