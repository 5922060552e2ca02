use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChevronLeft, FaChevronRight},
    Icon,
};

use crate::model::section::{
    ContentPosition, CtaDto, HeroDisplayMode, HeroSectionDto, HeroSlideDto, SlideLayout,
};

#[component]
pub fn HeroSection(section: HeroSectionDto) -> Element {
    let count = section.slides.len();
    let is_slider = section.mode == HeroDisplayMode::Slider && count > 1;

    let mut current = use_signal(|| 0usize);
    // Bumped on manual navigation so autoplay restarts its interval
    let mut interactions = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let autoplay = is_slider && section.autoplay;
        let interval_ms = section.autoplay_interval_secs.saturating_mul(1000);
        use_future(move || async move {
            if !autoplay {
                return;
            }
            loop {
                let seen = *interactions.peek();
                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                if *interactions.peek() == seen {
                    let next = (*current.peek() + 1) % count;
                    current.set(next);
                }
            }
        });
    }

    let mut go_to = move |index: usize| {
        current.set(index % count.max(1));
        interactions += 1;
    };

    if !is_slider {
        return rsx!(section {
            id: "{section.anchor}",
            if let Some(slide) = section.slides.first().cloned() {
                HeroSlide { slide }
            }
        });
    }

    let active = current() % count;

    rsx!(section {
        id: "{section.anchor}",
        class: "relative overflow-hidden",
        div {
            class: "flex transition-transform duration-700 ease-out",
            style: "transform: translateX(-{active * 100}%)",
            for slide in section.slides.iter().cloned() {
                div {
                    class: "w-full shrink-0",
                    HeroSlide { slide }
                }
            }
        }
        button {
            class: "btn btn-circle btn-ghost bg-base-100/60 absolute left-4 top-1/2 -translate-y-1/2",
            aria_label: "Previous slide",
            onclick: move |_| go_to(active + count - 1),
            Icon { width: 18, height: 18, icon: FaChevronLeft }
        }
        button {
            class: "btn btn-circle btn-ghost bg-base-100/60 absolute right-4 top-1/2 -translate-y-1/2",
            aria_label: "Next slide",
            onclick: move |_| go_to(active + 1),
            Icon { width: 18, height: 18, icon: FaChevronRight }
        }
        div {
            class: "absolute bottom-6 inset-x-0 flex justify-center gap-2",
            for index in 0..count {
                button {
                    class: if index == active { "w-8 h-2 rounded-full bg-primary" } else { "w-2 h-2 rounded-full bg-base-100/70" },
                    aria_label: "Go to slide {index + 1}",
                    onclick: move |_| go_to(index),
                }
            }
        }
    })
}

#[component]
fn HeroSlide(slide: HeroSlideDto) -> Element {
    match slide.layout {
        SlideLayout::ImageLeft | SlideLayout::ImageRight => {
            let image_first = slide.layout == SlideLayout::ImageLeft;
            rsx!(div {
                class: "min-h-[80vh] pt-28 pb-16 px-4 bg-gradient-to-br from-primary/5 to-base-100",
                div {
                    class: "grid gap-12 items-center lg:grid-cols-2 max-w-7xl mx-auto",
                    div {
                        class: if image_first { "lg:order-2" },
                        SlideContent { slide: slide.clone(), light: false }
                    }
                    if let Some(image) = &slide.image {
                        div {
                            class: "relative",
                            img {
                                class: "w-full rounded-3xl shadow-2xl object-cover",
                                src: "{image.url}",
                                alt: image.alt_or(slide.heading.as_deref().unwrap_or_default()),
                            }
                            if let Some(badge) = &slide.badge {
                                div {
                                    class: "absolute -bottom-6 left-6 p-4 rounded-box bg-base-100 shadow-xl",
                                    p { class: "font-bold", "{badge.title}" }
                                    if let Some(subtitle) = &badge.subtitle {
                                        p { class: "text-sm opacity-70", "{subtitle}" }
                                    }
                                }
                            }
                        }
                    }
                }
            })
        }
        SlideLayout::Background | SlideLayout::Banner => {
            let placement = placement_class(slide.layout, slide.content_position);
            rsx!(div {
                class: "relative min-h-[80vh] flex px-4 pt-28 pb-16 {placement}",
                if let Some(image) = &slide.image {
                    img {
                        class: "absolute inset-0 w-full h-full object-cover",
                        src: "{image.url}",
                        alt: image.alt_or(slide.heading.as_deref().unwrap_or_default()),
                    }
                }
                div { class: "absolute inset-0 {slide.overlay.class()}" }
                div {
                    class: "relative max-w-2xl",
                    SlideContent { slide: slide.clone(), light: true }
                }
            })
        }
    }
}

#[component]
fn SlideContent(slide: HeroSlideDto, light: bool) -> Element {
    let text = if light { "text-white" } else { "" };

    rsx!(div {
        class: "flex flex-col gap-6 {text}",
        if let Some(tagline) = &slide.tagline {
            span { class: "badge badge-primary badge-lg", "{tagline}" }
        }
        if let Some(heading) = &slide.heading {
            h1 { class: "text-4xl md:text-6xl font-bold leading-tight", "{heading}" }
        }
        if let Some(body) = &slide.body {
            p { class: "text-lg md:text-xl opacity-90", "{body}" }
        }
        div {
            class: "flex flex-wrap gap-4",
            if let Some(cta) = slide.primary_cta.clone() {
                CtaButton { cta, class: "btn btn-primary btn-lg" }
            }
            if let Some(cta) = slide.secondary_cta.clone() {
                CtaButton { cta, class: "btn btn-outline btn-lg" }
            }
        }
        if !slide.stats.is_empty() {
            dl {
                class: "flex flex-wrap gap-8 pt-4",
                for stat in slide.stats.iter() {
                    div {
                        dt { class: "text-3xl font-bold", "{stat.value}" }
                        dd { class: "text-sm opacity-80", "{stat.label}" }
                    }
                }
            }
        }
    })
}

#[component]
fn CtaButton(cta: CtaDto, class: &'static str) -> Element {
    rsx!(a { class, href: "{cta.href}", "{cta.label}" })
}

/// Flexbox alignment for content drawn over a full-width image.
fn placement_class(layout: SlideLayout, position: ContentPosition) -> &'static str {
    match (layout, position) {
        (SlideLayout::Banner, ContentPosition::Top) => "items-start justify-center text-center",
        (SlideLayout::Banner, ContentPosition::Bottom) => "items-end justify-center text-center",
        (SlideLayout::Banner, _) => "items-center justify-center text-center",
        (_, ContentPosition::Center) => "items-center justify-center text-center",
        (_, ContentPosition::Right) => "items-center justify-end",
        _ => "items-center justify-start",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_positions_are_vertical() {
        assert!(placement_class(SlideLayout::Banner, ContentPosition::Top).contains("items-start"));
        assert!(placement_class(SlideLayout::Banner, ContentPosition::Center).contains("items-center"));
    }

    #[test]
    fn background_positions_are_horizontal() {
        assert!(placement_class(SlideLayout::Background, ContentPosition::Right).contains("justify-end"));
        assert!(placement_class(SlideLayout::Background, ContentPosition::Left).contains("justify-start"));
    }
}
