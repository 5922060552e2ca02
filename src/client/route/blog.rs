use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowLeft, Icon};

use crate::{
    client::{
        api::{load_post, load_posts},
        component::{
            page::{ErrorPage, LoadingPage},
            BlogCard, Page,
        },
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::blog::{format_published, BlogPostDto, ContentBlockDto, TextSpanDto},
};

#[component]
pub fn BlogIndex(locale: String) -> Element {
    let posts = use_server_future(use_reactive!(|locale| load_posts(locale, None)))?;

    rsx! {
        Title { "Blog | {SITE_NAME}" }
        Page {
            class: "px-4 pb-20",
            div {
                class: "max-w-7xl mx-auto",
                h1 { class: "text-4xl md:text-5xl font-bold text-center my-12", "Blog" }
                match Cache::from_resource(posts()) {
                    Cache::Fetched(list) if list.is_empty() => rsx!(
                        p { class: "text-center opacity-70", "No articles yet. Check back soon." }
                    ),
                    Cache::Fetched(list) => rsx!(
                        div {
                            class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                            for post in list {
                                BlogCard { key: "{post.slug}", post, locale: locale.clone() }
                            }
                        }
                    ),
                    Cache::Error(err) => rsx!(
                        p { class: "text-center text-error", "{err.message}" }
                    ),
                    Cache::Loading => rsx!(
                        div {
                            class: "flex justify-center",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    ),
                }
            }
        }
    }
}

#[component]
pub fn BlogPost(locale: String, slug: String) -> Element {
    let post = use_server_future(use_reactive!(|slug, locale| load_post(slug, locale)))?;

    match Cache::from_resource(post()) {
        Cache::Loading => rsx!(LoadingPage {}),
        Cache::Fetched(None) => rsx! {
            Title { "Article not found | {SITE_NAME}" }
            ErrorPage { status: 404, message: "This article does not exist.".to_string() }
        },
        Cache::Error(err) => rsx!(ErrorPage {
            status: err.status,
            message: err.message
        }),
        Cache::Fetched(Some(post)) => rsx!(Article { post, locale }),
    }
}

#[component]
fn Article(post: BlogPostDto, locale: String) -> Element {
    let summary = &post.summary;
    let seo = post.seo.clone().unwrap_or_default();
    let title = seo
        .meta_title
        .unwrap_or_else(|| format!("{} | {}", summary.title, SITE_NAME));
    let description = seo.meta_description.or_else(|| summary.excerpt.clone());
    let published = summary.published_at.as_ref().map(format_published);

    rsx! {
        Title { "{title}" }
        if let Some(description) = description {
            document::Meta { name: "description", content: description }
        }
        Page {
            class: "px-4 pb-20",
            article {
                class: "max-w-3xl mx-auto",
                Link {
                    to: Route::BlogIndex { locale: locale.clone() },
                    class: "btn btn-ghost btn-sm gap-2 my-8",
                    Icon { width: 12, height: 12, icon: FaArrowLeft }
                    "All articles"
                }
                header {
                    class: "flex flex-col gap-4 mb-8",
                    if !summary.categories.is_empty() {
                        div {
                            class: "flex flex-wrap gap-2",
                            for category in summary.categories.iter() {
                                span { class: "badge badge-primary badge-outline", "{category.name}" }
                            }
                        }
                    }
                    h1 { class: "text-4xl md:text-5xl font-bold leading-tight", "{summary.title}" }
                    div {
                        class: "flex flex-wrap items-center gap-3 text-sm opacity-70",
                        if let Some(image) = &summary.author.image {
                            img { class: "w-10 h-10 rounded-full object-cover", src: "{image}", alt: "{summary.author.name}" }
                        }
                        span { "{summary.author.name}" }
                        if let Some(published) = published {
                            span { "·" }
                            time { "{published}" }
                        }
                        span { "·" }
                        span { "{post.reading_minutes} min read" }
                    }
                }
                if let Some(image) = &summary.featured_image {
                    img {
                        class: "w-full rounded-box mb-10",
                        src: "{image.url}",
                        alt: image.alt_or(&summary.title),
                    }
                }
                div {
                    class: "flex flex-col gap-5 text-lg leading-relaxed",
                    for block in post.content.iter().cloned() {
                        ContentBlock { block }
                    }
                }
            }
        }
    }
}

#[component]
fn ContentBlock(block: ContentBlockDto) -> Element {
    match block {
        ContentBlockDto::Heading { level, text } => match level {
            1 => rsx!(h1 { class: "text-4xl font-bold mt-6", "{text}" }),
            2 => rsx!(h2 { class: "text-3xl font-bold mt-6", "{text}" }),
            3 => rsx!(h3 { class: "text-2xl font-semibold mt-4", "{text}" }),
            _ => rsx!(h4 { class: "text-xl font-semibold mt-4", "{text}" }),
        },
        ContentBlockDto::Paragraph { text, spans } => rsx!(
            p {
                if spans.is_empty() {
                    "{text}"
                } else {
                    for (i, span) in spans.into_iter().enumerate() {
                        InlineText { key: "{i}", run: span }
                    }
                }
            }
        ),
        ContentBlockDto::Quote { text, spans } => rsx!(
            blockquote {
                class: "border-l-4 border-primary pl-4 italic opacity-90",
                if spans.is_empty() {
                    "{text}"
                } else {
                    for (i, span) in spans.into_iter().enumerate() {
                        InlineText { key: "{i}", run: span }
                    }
                }
            }
        ),
        ContentBlockDto::Image { image, caption } => rsx!(
            figure {
                class: "flex flex-col gap-2",
                img {
                    class: "w-full rounded-box",
                    src: "{image.url}",
                    alt: image.alt_or(caption.as_deref().unwrap_or_default()),
                    loading: "lazy",
                }
                if let Some(ref caption) = caption {
                    figcaption { class: "text-sm text-center opacity-70", "{caption}" }
                }
            }
        ),
    }
}

#[component]
fn InlineText(run: TextSpanDto) -> Element {
    let TextSpanDto {
        text,
        href,
        strong,
        em,
    } = run;
    let class = match (strong, em) {
        (true, true) => "font-semibold italic",
        (true, false) => "font-semibold",
        (false, true) => "italic",
        (false, false) => "",
    };

    match href {
        Some(href) if is_external(&href) => rsx!(
            a {
                class: "link link-primary {class}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text}"
            }
        ),
        Some(href) => rsx!(
            a { class: "link link-primary {class}", href: "{href}", "{text}" }
        ),
        None if class.is_empty() => rsx!("{text}"),
        None => rsx!(span { class, "{text}" }),
    }
}

/// Links leaving the site open in a new tab.
fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
