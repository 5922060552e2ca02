use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};

use super::SectionHeader;
use crate::model::section::TestimonialsSectionDto;

#[component]
pub fn TestimonialsSection(section: TestimonialsSectionDto) -> Element {
    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-7xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for testimonial in section.testimonials.iter() {
                    figure {
                        class: "card bg-base-100 shadow-sm",
                        div {
                            class: "card-body gap-4",
                            div {
                                class: "flex gap-1 text-warning",
                                title: "{testimonial.rating} / 5",
                                for _ in 0..testimonial.rating {
                                    Icon { width: 16, height: 16, icon: FaStar }
                                }
                            }
                            blockquote { class: "opacity-90", "“{testimonial.text}”" }
                            figcaption {
                                class: "flex items-center gap-3 mt-auto",
                                if let Some(image) = &testimonial.image {
                                    img {
                                        class: "w-12 h-12 rounded-full object-cover",
                                        src: "{image.url}",
                                        alt: image.alt_or(&testimonial.name),
                                    }
                                }
                                div {
                                    p { class: "font-semibold", "{testimonial.name}" }
                                    p {
                                        class: "text-sm opacity-70",
                                        {[testimonial.country.clone(), testimonial.treatment.clone()]
                                            .into_iter()
                                            .flatten()
                                            .collect::<Vec<_>>()
                                            .join(" · ")}
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
