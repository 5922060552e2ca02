use dioxus::prelude::*;

use crate::{
    client::{
        api::load_page,
        component::{Footer, Navbar},
        constant::HOME_SLUG,
        router::Route,
    },
    model::page::PageDto,
};

/// Home page of the current locale, shared by the layout and the home route.
///
/// The layout needs it for the navigation links and the footer, the home
/// route for its sections, so it is loaded once per locale.
pub type HomePageContext = Resource<Result<PageDto, ServerFnError>>;

#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale().unwrap_or_default().to_string();
    let on_home = matches!(route, Route::Home { .. });

    let home_page: HomePageContext = use_server_future(use_reactive!(|locale| {
        load_page(HOME_SLUG.to_string(), locale)
    }))?;
    use_context_provider(|| home_page);

    let page = home_page().and_then(Result::ok);
    let nav_links = page
        .as_ref()
        .map(|page| page.nav_links.clone())
        .unwrap_or_default();
    let footer = page.and_then(|page| page.footer);

    rsx!(div {
        class: "flex flex-col min-h-screen",
        Navbar {
            locale: locale.clone(),
            links: nav_links,
            on_home,
        }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        if let Some(footer) = footer {
            Footer { footer }
        }
    })
}
