use dioxus::prelude::*;

use super::SectionHeader;
use crate::model::section::PriceComparisonSectionDto;

#[component]
pub fn PriceComparisonSection(section: PriceComparisonSectionDto) -> Element {
    let show_savings = section.rows.iter().any(|row| row.savings_percent.is_some());

    rsx!(section {
        id: "{section.anchor}",
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-6xl mx-auto",
            SectionHeader { title: section.title.clone(), subtitle: section.subtitle.clone() }
            div {
                class: "overflow-x-auto rounded-box bg-base-100 shadow",
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Treatment" }
                            for country in section.countries.iter() {
                                th {
                                    class: if country.highlighted { "text-primary bg-primary/10" },
                                    span {
                                        class: "flex items-center gap-2",
                                        if let Some(flag) = &country.flag {
                                            span { "{flag}" }
                                        }
                                        "{country.name}"
                                    }
                                }
                            }
                            if show_savings {
                                th { "Savings" }
                            }
                        }
                    }
                    tbody {
                        for row in section.rows.iter() {
                            tr {
                                td { class: "font-medium", "{row.treatment}" }
                                for (price, country) in row.prices.iter().zip(section.countries.iter()) {
                                    td {
                                        class: if country.highlighted { "font-bold text-primary bg-primary/5" },
                                        {price.clone().unwrap_or_else(|| "-".to_string())}
                                    }
                                }
                                if show_savings {
                                    td {
                                        if let Some(savings) = row.savings_percent {
                                            span { class: "badge badge-success", "{savings}%" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if !section.footer_notes.is_empty() {
                div {
                    class: "grid gap-4 md:grid-cols-3 mt-8",
                    for note in section.footer_notes.iter() {
                        div {
                            class: "p-4 rounded-box bg-base-100",
                            if let Some(title) = &note.title {
                                p { class: "font-semibold", "{title}" }
                            }
                            if let Some(description) = &note.description {
                                p { class: "text-sm opacity-80", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    })
}
