use dioxus::prelude::*;

use crate::{
    client::router::Route,
    model::blog::{format_published, BlogPostSummaryDto},
};

#[component]
pub fn BlogCard(post: BlogPostSummaryDto, locale: String) -> Element {
    let published = post.published_at.as_ref().map(format_published);
    let category = post.categories.first().map(|c| c.name.clone());

    rsx!(article {
        class: "card bg-base-100 shadow-md hover:shadow-xl transition-shadow h-full",
        if let Some(image) = &post.featured_image {
            figure {
                class: "aspect-video overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "{image.url}",
                    alt: image.alt_or(&post.title),
                    loading: "lazy",
                }
            }
        }
        div {
            class: "card-body gap-3",
            div {
                class: "flex flex-wrap items-center gap-2 text-sm opacity-70",
                if let Some(category) = category {
                    span { class: "badge badge-primary badge-outline", "{category}" }
                }
                if let Some(published) = published {
                    time { "{published}" }
                }
            }
            h3 {
                class: "card-title",
                Link {
                    to: Route::BlogPost { locale: locale.clone(), slug: post.slug.clone() },
                    class: "link link-hover",
                    "{post.title}"
                }
            }
            if let Some(excerpt) = &post.excerpt {
                p { class: "opacity-80 line-clamp-3", "{excerpt}" }
            }
            p { class: "text-sm opacity-60 mt-auto", "{post.author.name}" }
        }
    })
}
