use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBars, FaTooth, FaXmark},
    Icon,
};

use crate::{
    client::{component::LanguageSwitch, constant::SITE_NAME, router::Route},
    model::page::NavLinkDto,
};

/// Href for a navigation link as seen from the current page.
///
/// Anchors point into the home page, so off the home page they are prefixed
/// with the home path.
pub fn nav_href(link: &NavLinkDto, locale: &str, on_home: bool) -> String {
    if link.is_anchor() && !on_home {
        format!("/{}{}", locale, link.href)
    } else {
        link.href.clone()
    }
}

#[component]
pub fn Navbar(locale: String, links: Vec<NavLinkDto>, on_home: bool) -> Element {
    let mut menu_open = use_signal(|| false);

    let links: Vec<(String, String, bool)> = links
        .iter()
        .map(|link| {
            (
                link.label.clone(),
                nav_href(link, &locale, on_home),
                link.is_anchor(),
            )
        })
        .collect();

    rsx!(nav {
        class: "fixed top-0 w-full h-20 px-4 bg-base-100/95 shadow-sm backdrop-blur z-30",
        div {
            class: "flex items-center justify-between gap-4 h-full max-w-7xl mx-auto",
            Link {
                to: Route::Home { locale: locale.clone() },
                class: "flex items-center gap-2 text-primary",
                Icon { width: 28, height: 28, icon: FaTooth }
                span { class: "text-xl font-bold", {SITE_NAME} }
            }
            ul {
                class: "hidden lg:flex items-center gap-6",
                for (label, href, is_anchor) in links.iter().cloned() {
                    li {
                        if is_anchor {
                            a { class: "link link-hover", href, "{label}" }
                        } else {
                            Link { class: "link link-hover", to: href, "{label}" }
                        }
                    }
                }
            }
            div {
                class: "flex items-center gap-2",
                LanguageSwitch { locale: locale.clone() }
                button {
                    class: "btn btn-ghost btn-square lg:hidden",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { width: 20, height: 20, icon: FaXmark }
                    } else {
                        Icon { width: 20, height: 20, icon: FaBars }
                    }
                }
            }
        }
        if menu_open() {
            ul {
                class: "lg:hidden menu bg-base-100 rounded-box shadow p-4 gap-1",
                for (label, href, is_anchor) in links.into_iter() {
                    li {
                        onclick: move |_| menu_open.set(false),
                        if is_anchor {
                            a { href, "{label}" }
                        } else {
                            Link { to: href, "{label}" }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, href: &str) -> NavLinkDto {
        NavLinkDto {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn anchors_stay_relative_on_home() {
        assert_eq!(nav_href(&link("Process", "#process"), "en", true), "#process");
    }

    #[test]
    fn anchors_point_home_elsewhere() {
        assert_eq!(
            nav_href(&link("Contact", "#contact"), "ru", false),
            "/ru#contact"
        );
    }

    #[test]
    fn paths_are_unchanged() {
        assert_eq!(nav_href(&link("Blog", "/en/blog"), "en", false), "/en/blog");
    }
}
