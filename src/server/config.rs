use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2024-01-01";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_LOCALE_CACHE_TTL_SECS: u64 = 60;

pub struct Config {
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    /// Overrides the API host derived from the project id.
    pub sanity_api_url: Option<String>,
    pub sanity_token: Option<String>,

    pub default_locale: String,
    pub locale_cache_ttl: Duration,

    pub contact_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let locale_cache_ttl_secs = match optional_var("LOCALE_CACHE_TTL_SECS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOCALE_CACHE_TTL_SECS".to_string(),
                value,
            })?,
            None => DEFAULT_LOCALE_CACHE_TTL_SECS,
        };

        let sanity_use_cdn = match optional_var("SANITY_USE_CDN") {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "SANITY_USE_CDN".to_string(),
                value,
            })?,
            None => true,
        };

        Ok(Self {
            sanity_project_id: std::env::var("SANITY_PROJECT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("SANITY_PROJECT_ID".to_string()))?,
            sanity_dataset: optional_var("SANITY_DATASET")
                .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            sanity_api_version: optional_var("SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            sanity_use_cdn,
            sanity_api_url: optional_var("SANITY_API_URL"),
            sanity_token: optional_var("SANITY_TOKEN"),
            default_locale: optional_var("DEFAULT_LOCALE")
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            locale_cache_ttl: Duration::from_secs(locale_cache_ttl_secs),
            contact_webhook_url: optional_var("CONTACT_WEBHOOK_URL"),
        })
    }

    /// Base URL of the content API, e.g. `https://abc123.apicdn.sanity.io`.
    pub fn sanity_base_url(&self) -> String {
        if let Some(url) = &self.sanity_api_url {
            return url.trim_end_matches('/').to_string();
        }

        let host = if self.sanity_use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };

        format!("https://{}.{}", self.sanity_project_id, host)
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
