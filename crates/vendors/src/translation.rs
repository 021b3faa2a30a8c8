//! Vendor translation: the locale-scoped slice of vendor content.

use forgemarket_core::{Locale, Translation};

/// Localized vendor content. Currently just the storefront description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorTranslation {
    locale: Locale,
    description: Option<String>,
}

impl VendorTranslation {
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn clear_description(&mut self) {
        self.description = None;
    }
}

impl Translation for VendorTranslation {
    fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            description: None,
        }
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}
