use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowRight, Icon};

use crate::client::{
    api::load_posts, component::BlogCard, constant::HOME_POST_LIMIT, model::cache::Cache,
    router::Route,
};

/// Latest blog posts, shown at the end of the home page.
///
/// Renders nothing until posts arrive or when there are none.
#[component]
pub fn LatestPostsSection(locale: String) -> Element {
    let posts = use_server_future(use_reactive!(|locale| {
        load_posts(locale, Some(HOME_POST_LIMIT))
    }))?;

    let posts = Cache::from_resource(posts()).into_data().unwrap_or_default();
    if posts.is_empty() {
        return rsx!();
    }

    rsx!(section {
        id: "blog",
        class: "py-20 px-4",
        div {
            class: "max-w-7xl mx-auto",
            div {
                class: "flex flex-wrap items-end justify-between gap-4 mb-10",
                h2 { class: "text-3xl md:text-4xl font-bold", "Latest articles" }
                Link {
                    to: Route::BlogIndex { locale: locale.clone() },
                    class: "btn btn-ghost gap-2",
                    "All articles"
                    Icon { width: 14, height: 14, icon: FaArrowRight }
                }
            }
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
                for post in posts {
                    BlogCard { key: "{post.slug}", post, locale: locale.clone() }
                }
            }
        }
    })
}
