use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaGlobe, Icon};

use crate::{
    client::{app::LocalesContext, model::cache::Cache, router::Route},
    i18n::localized_path,
};

/// Dropdown switching the current page to another locale.
///
/// Uses plain anchors so the switch goes through the server, which stores the
/// choice in the locale cookie.
#[component]
pub fn LanguageSwitch(locale: String) -> Element {
    let locales = use_context::<LocalesContext>();
    let route = use_route::<Route>();

    let Some(locales) = Cache::from_resource(locales()).into_data() else {
        return rsx!();
    };
    if locales.locales.len() < 2 {
        return rsx!();
    }

    let current_path = route.to_string();
    let supported = locales.codes();
    let current = locales.find(&locale);
    let current_label = current
        .map(|l| format!("{} {}", l.flag.clone().unwrap_or_default(), l.code.to_uppercase()))
        .unwrap_or_else(|| locale.to_uppercase());

    let options: Vec<(String, String, String, bool)> = locales
        .locales
        .iter()
        .map(|l| {
            (
                localized_path(&current_path, &l.code, &supported),
                l.flag.clone().unwrap_or_default(),
                l.name.clone(),
                l.code == locale,
            )
        })
        .collect();

    rsx!(div {
        class: "dropdown dropdown-end",
        div {
            tabindex: 0,
            role: "button",
            class: "btn btn-ghost gap-2",
            Icon { width: 16, height: 16, icon: FaGlobe }
            span { "{current_label}" }
        }
        ul {
            tabindex: 0,
            class: "dropdown-content menu bg-base-100 rounded-box shadow w-48 p-2 z-40",
            for (href, flag, name, active) in options {
                li {
                    a {
                        class: if active { "active" },
                        href,
                        span { "{flag}" }
                        span { "{name}" }
                    }
                }
            }
        }
    })
}
