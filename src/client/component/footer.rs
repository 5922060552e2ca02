use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::{FaFacebook, FaTelegram, FaWhatsapp},
        fa_solid_icons::{FaEnvelope, FaLocationDot, FaPhone},
    },
    Icon,
};

use crate::{client::constant::SITE_NAME, model::page::FooterDto};

#[component]
pub fn Footer(footer: FooterDto) -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx!(footer {
        class: "bg-neutral text-neutral-content",
        div {
            class: "grid gap-10 md:grid-cols-2 max-w-7xl mx-auto px-4 py-12",
            div {
                class: "flex flex-col gap-4",
                if let Some(title) = &footer.title {
                    h2 { class: "text-2xl font-bold", "{title}" }
                }
                if let Some(subtitle) = &footer.subtitle {
                    p { class: "opacity-80", "{subtitle}" }
                }
                ul {
                    class: "flex flex-col gap-3",
                    if let Some(phone) = &footer.phone {
                        li {
                            a { class: "flex items-center gap-3 link link-hover", href: "{phone.href}",
                                Icon { width: 16, height: 16, icon: FaPhone }
                                "{phone.label}"
                            }
                        }
                    }
                    if let Some(email) = &footer.email {
                        li {
                            a { class: "flex items-center gap-3 link link-hover", href: "{email.href}",
                                Icon { width: 16, height: 16, icon: FaEnvelope }
                                "{email.label}"
                            }
                        }
                    }
                    if let Some(address) = &footer.address {
                        li {
                            class: "flex items-center gap-3",
                            Icon { width: 16, height: 16, icon: FaLocationDot }
                            "{address}"
                        }
                    }
                }
                div {
                    class: "flex gap-3",
                    if let Some(whatsapp) = &footer.whatsapp {
                        a { class: "btn btn-circle btn-sm", href: "{whatsapp.href}", target: "_blank",
                            rel: "noopener noreferrer", title: "{whatsapp.label}",
                            Icon { width: 16, height: 16, icon: FaWhatsapp }
                        }
                    }
                    if let Some(telegram) = &footer.telegram {
                        a { class: "btn btn-circle btn-sm", href: "{telegram.href}", target: "_blank",
                            rel: "noopener noreferrer", title: "{telegram.label}",
                            Icon { width: 16, height: 16, icon: FaTelegram }
                        }
                    }
                    if let Some(facebook) = &footer.facebook {
                        a { class: "btn btn-circle btn-sm", href: "{facebook.href}", target: "_blank",
                            rel: "noopener noreferrer", title: "{facebook.label}",
                            Icon { width: 16, height: 16, icon: FaFacebook }
                        }
                    }
                }
            }
            if let Some(map) = &footer.map_embed_url {
                iframe {
                    class: "w-full h-64 rounded-box border-0",
                    src: "{map}",
                    "loading": "lazy",
                    referrerpolicy: "no-referrer-when-downgrade",
                    title: "Map",
                }
            }
        }
        div {
            class: "border-t border-neutral-content/20 py-4 text-center text-sm opacity-70",
            "© {year} {SITE_NAME}"
        }
    })
}
