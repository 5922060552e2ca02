use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChevronLeft, FaChevronRight, FaXmark},
    Icon,
};

use super::SectionHeader;
use crate::model::section::GallerySectionDto;

#[component]
pub fn GallerySection(section: GallerySectionDto) -> Element {
    let mut open = use_signal(|| None::<usize>);
    let count = section.images.len();

    let lightbox = open().and_then(|index| section.images.get(index).cloned().map(|i| (index, i)));

    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4",
        div {
            class: "max-w-7xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "grid gap-4 grid-cols-2 md:grid-cols-3 lg:grid-cols-4",
                for (index, item) in section.images.iter().enumerate() {
                    button {
                        class: "group relative aspect-square overflow-hidden rounded-box",
                        onclick: move |_| open.set(Some(index)),
                        img {
                            class: "w-full h-full object-cover transition-transform group-hover:scale-105",
                            src: "{item.image.url}",
                            alt: item.image.alt_or(item.title.as_deref().unwrap_or_default()),
                            loading: "lazy",
                        }
                        if let Some(title) = &item.title {
                            span {
                                class: "absolute inset-x-0 bottom-0 p-2 text-sm text-white bg-black/50 opacity-0 group-hover:opacity-100",
                                "{title}"
                            }
                        }
                    }
                }
            }
        }
        if let Some((index, item)) = lightbox {
            div {
                class: "fixed inset-0 z-50 flex items-center justify-center bg-black/90 p-4",
                onclick: move |_| open.set(None),
                button {
                    class: "btn btn-circle btn-ghost text-white absolute top-4 right-4",
                    onclick: move |_| open.set(None),
                    Icon { width: 20, height: 20, icon: FaXmark }
                }
                if count > 1 {
                    button {
                        class: "btn btn-circle btn-ghost text-white absolute left-4",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            open.set(Some((index + count - 1) % count));
                        },
                        Icon { width: 20, height: 20, icon: FaChevronLeft }
                    }
                }
                figure {
                    class: "flex flex-col items-center gap-3 max-w-5xl",
                    onclick: move |evt| evt.stop_propagation(),
                    img {
                        class: "max-h-[80vh] object-contain",
                        src: "{item.image.url}",
                        alt: item.image.alt_or(item.title.as_deref().unwrap_or_default()),
                    }
                    if item.title.is_some() || item.description.is_some() {
                        figcaption {
                            class: "text-center text-white",
                            if let Some(title) = &item.title {
                                p { class: "font-semibold", "{title}" }
                            }
                            if let Some(description) = &item.description {
                                p { class: "text-sm opacity-80", "{description}" }
                            }
                        }
                    }
                }
                if count > 1 {
                    button {
                        class: "btn btn-circle btn-ghost text-white absolute right-4",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            open.set(Some((index + 1) % count));
                        },
                        Icon { width: 20, height: 20, icon: FaChevronRight }
                    }
                }
            }
        }
    })
}
