use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LocaleDto {
    pub code: String,
    pub name: String,
    pub flag: Option<String>,
    pub is_default: bool,
}

/// Active locales offered by the site, default locale first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LocalesDto {
    pub default_locale: String,
    pub locales: Vec<LocaleDto>,
}

impl LocalesDto {
    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.code.as_str()).collect()
    }

    pub fn find(&self, code: &str) -> Option<&LocaleDto> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }
}
