//! Locale documents and the resolved set of locales the site serves.
//!
//! The content store owns the list of languages. `LocaleSettings` is the
//! validated view of it: active locales only, well-formed codes only, and
//! exactly one default.

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    i18n::looks_like_locale,
    model::locale::{LocaleDto, LocalesDto},
    server::util::text::non_empty,
};

/// Raw `locale` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    pub flag: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub code: String,
    pub name: String,
    pub flag: Option<String>,
}

/// Active locales plus the one used when nothing else matches.
///
/// `default_locale` is always one of `locales`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    pub default_locale: String,
    pub locales: Vec<Locale>,
}

impl LocaleSettings {
    /// Builds settings from CMS documents.
    ///
    /// Inactive locales, malformed codes and duplicates are skipped. The
    /// default is the active locale flagged `isDefault`, else
    /// `configured_default` when it is active, else the first active locale.
    /// Without any usable locale this is [`LocaleSettings::fallback`].
    ///
    /// # Arguments
    /// - `documents` - Locale documents as returned by the content store
    /// - `configured_default` - `DEFAULT_LOCALE` from the environment
    pub fn from_documents(documents: Vec<LocaleDocument>, configured_default: &str) -> Self {
        let mut locales: Vec<Locale> = Vec::new();
        let mut flagged_default: Option<String> = None;

        for doc in documents {
            if doc.is_active == Some(false) {
                continue;
            }

            let Some(code) = non_empty(doc.code) else {
                tracing::warn!("Skipping locale document {} without a code", doc.id);
                continue;
            };

            if !looks_like_locale(&code) {
                tracing::warn!("Skipping locale document {} with invalid code '{}'", doc.id, code);
                continue;
            }

            if locales.iter().any(|l| l.code == code) {
                tracing::warn!("Skipping duplicate locale code '{}' ({})", code, doc.id);
                continue;
            }

            if doc.is_default == Some(true) && flagged_default.is_none() {
                flagged_default = Some(code.clone());
            }

            locales.push(Locale {
                name: non_empty(doc.name).unwrap_or_else(|| code.to_uppercase()),
                flag: non_empty(doc.flag),
                code,
            });
        }

        if locales.is_empty() {
            return Self::fallback(configured_default);
        }

        let default_locale = flagged_default
            .or_else(|| {
                locales
                    .iter()
                    .find(|l| l.code == configured_default)
                    .map(|l| l.code.clone())
            })
            .unwrap_or_else(|| locales[0].code.clone());

        Self {
            default_locale,
            locales,
        }
    }

    /// Settings used when the content store cannot be reached and nothing is
    /// cached: only the configured default locale.
    pub fn fallback(configured_default: &str) -> Self {
        Self {
            default_locale: configured_default.to_string(),
            locales: vec![Locale {
                code: configured_default.to_string(),
                name: configured_default.to_uppercase(),
                flag: None,
            }],
        }
    }

    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.code.as_str()).collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l.code == code)
    }

    /// Returns `requested` when it is an active locale, otherwise the default.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if self.contains(code) => code,
            _ => &self.default_locale,
        }
    }

    /// Default locale first, the rest in CMS order.
    pub fn into_dto(self) -> LocalesDto {
        let default_locale = self.default_locale;

        let mut locales: Vec<LocaleDto> = self
            .locales
            .into_iter()
            .map(|l| LocaleDto {
                is_default: l.code == default_locale,
                code: l.code,
                name: l.name,
                flag: l.flag,
            })
            .collect();
        locales.sort_by_key(|l| !l.is_default);

        LocalesDto {
            default_locale,
            locales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(code: &str, is_default: bool, is_active: Option<bool>) -> LocaleDocument {
        LocaleDocument {
            id: format!("locale-{}", code),
            code: Some(code.to_string()),
            name: None,
            flag: None,
            is_default: Some(is_default),
            is_active,
        }
    }

    #[test]
    fn flagged_default_wins() {
        let settings = LocaleSettings::from_documents(
            vec![doc("en", false, None), doc("ru", true, Some(true))],
            "en",
        );
        assert_eq!(settings.default_locale, "ru");
        assert_eq!(settings.codes(), vec!["en", "ru"]);
    }

    #[test]
    fn configured_default_used_without_flag() {
        let settings =
            LocaleSettings::from_documents(vec![doc("ru", false, None), doc("en", false, None)], "en");
        assert_eq!(settings.default_locale, "en");
    }

    #[test]
    fn first_active_used_when_configured_default_is_missing() {
        let settings =
            LocaleSettings::from_documents(vec![doc("ru", false, None), doc("uz", false, None)], "en");
        assert_eq!(settings.default_locale, "ru");
    }

    #[test]
    fn inactive_and_invalid_locales_are_skipped() {
        let settings = LocaleSettings::from_documents(
            vec![
                doc("en", false, None),
                doc("de", true, Some(false)),
                doc("english", false, None),
                doc("en", false, None),
            ],
            "en",
        );
        assert_eq!(settings.codes(), vec!["en"]);
        assert_eq!(settings.default_locale, "en");
    }

    #[test]
    fn empty_documents_fall_back_to_configured_default() {
        let settings = LocaleSettings::from_documents(Vec::new(), "en");
        assert_eq!(settings, LocaleSettings::fallback("en"));
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let settings =
            LocaleSettings::from_documents(vec![doc("en", true, None), doc("ru", false, None)], "en");
        assert_eq!(settings.resolve(Some("ru")), "ru");
        assert_eq!(settings.resolve(Some("de")), "en");
        assert_eq!(settings.resolve(None), "en");
    }

    #[test]
    fn dto_lists_default_first() {
        let dto =
            LocaleSettings::from_documents(vec![doc("en", false, None), doc("ru", true, None)], "en")
                .into_dto();
        assert_eq!(dto.default_locale, "ru");
        assert_eq!(dto.codes(), vec!["ru", "en"]);
        assert!(dto.locales[0].is_default);
        assert!(!dto.locales[1].is_default);
    }
}
