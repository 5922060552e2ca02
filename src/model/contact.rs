use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Treatments a visitor can ask about, as `(value, label)` pairs.
pub const TREATMENT_OPTIONS: &[(&str, &str)] = &[
    ("implants", "Dental Implants"),
    ("veneers", "Veneers"),
    ("whitening", "Teeth Whitening"),
    ("crown", "Dental Crown"),
    ("root-canal", "Root Canal"),
    ("full-reconstruction", "Full Mouth Reconstruction"),
    ("other", "Other"),
];

pub const COUNTRY_OPTIONS: &[&str] = &[
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Canada",
    "Australia",
    "Netherlands",
    "Switzerland",
    "Austria",
    "Belgium",
    "Sweden",
    "Norway",
    "Denmark",
    "Other",
];

pub fn treatment_label(value: &str) -> &str {
    TREATMENT_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContactRequestDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Locale the form was submitted from.
    #[serde(default)]
    pub locale: Option<String>,
}
