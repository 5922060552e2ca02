//! Locale document factory.

use serde_json::{json, Value};

use crate::factory::helpers::document_id;

/// Factory for `locale` documents.
///
/// # Example
///
/// ```rust,ignore
/// let ru = LocaleFactory::new("ru").name("Русский").flag("🇷🇺").build();
/// ```
pub struct LocaleFactory {
    code: String,
    name: String,
    flag: Option<String>,
    is_default: bool,
    is_active: bool,
}

impl LocaleFactory {
    /// Creates an active, non-default locale named after its code.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.to_uppercase(),
            code,
            flag: None,
            is_default: false,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "_id": document_id("locale"),
            "code": self.code,
            "name": self.name,
            "flag": self.flag,
            "isDefault": self.is_default,
            "isActive": self.is_active,
        })
    }
}

/// Creates an active, non-default locale.
pub fn create_locale(code: &str) -> Value {
    LocaleFactory::new(code).build()
}

/// Creates the active default locale.
pub fn create_default_locale(code: &str) -> Value {
    LocaleFactory::new(code).is_default(true).build()
}
