//! Page section components.
//!
//! [`Section`] is the single place where a `SectionDto` variant is mapped to
//! the component that draws it.

mod additional_services;
mod contact;
mod feature_cards;
mod gallery;
mod hero;
mod latest_posts;
mod popular_treatments;
mod price_comparison;
mod process;
mod testimonials;

pub use additional_services::AdditionalServicesSection;
pub use contact::ContactSection;
pub use feature_cards::FeatureCardsSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use latest_posts::LatestPostsSection;
pub use popular_treatments::PopularTreatmentsSection;
pub use price_comparison::PriceComparisonSection;
pub use process::ProcessSection;
pub use testimonials::TestimonialsSection;

use dioxus::prelude::*;

use crate::model::section::SectionDto;

#[component]
pub fn Section(section: SectionDto) -> Element {
    match section {
        SectionDto::Hero(section) => rsx!(HeroSection { section }),
        SectionDto::FeatureCards(section) => rsx!(FeatureCardsSection { section }),
        SectionDto::PopularTreatments(section) => rsx!(PopularTreatmentsSection { section }),
        SectionDto::PriceComparison(section) => rsx!(PriceComparisonSection { section }),
        SectionDto::AdditionalServices(section) => rsx!(AdditionalServicesSection { section }),
        SectionDto::Process(section) => rsx!(ProcessSection { section }),
        SectionDto::Gallery(section) => rsx!(GallerySection { section }),
        SectionDto::Testimonials(section) => rsx!(TestimonialsSection { section }),
    }
}

/// Centered title and subtitle shared by most sections.
#[component]
fn SectionHeader(title: Option<String>, subtitle: Option<String>) -> Element {
    if title.is_none() && subtitle.is_none() {
        return rsx!();
    }

    rsx!(div {
        class: "max-w-3xl mx-auto mb-12 text-center",
        if let Some(title) = title {
            h2 { class: "text-3xl md:text-4xl font-bold mb-4", "{title}" }
        }
        if let Some(subtitle) = subtitle {
            p { class: "text-lg opacity-80", "{subtitle}" }
        }
    })
}

/// `style` attribute for an optional CMS color.
fn background_style(color: &Option<String>) -> String {
    color
        .as_deref()
        .map(|c| format!("background-color: {}", c))
        .unwrap_or_default()
}
