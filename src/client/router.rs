use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{BlogIndex, BlogPost, Home, NotFound, Root};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},

    #[layout(Layout)]
    #[nest("/:locale")]
        #[route("/")]
        Home { locale: String },

        #[route("/blog")]
        BlogIndex { locale: String },

        #[route("/blog/:slug")]
        BlogPost { locale: String, slug: String },
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Locale prefix of a localized route.
    pub fn locale(&self) -> Option<&str> {
        match self {
            Route::Home { locale }
            | Route::BlogIndex { locale }
            | Route::BlogPost { locale, .. } => Some(locale),
            Route::Root {} | Route::NotFound { .. } => None,
        }
    }
}
