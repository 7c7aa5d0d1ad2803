//! Fixed fallback locale.

use super::{Resolution, Resolver};
use crate::error::{LocaleError, Result};
use crate::locale::{is_valid_locale, normalize_locale};

/// Always resolves to the same locale.
///
/// Typically attached at the lowest priority as the application default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedResolver {
    locale: String,
    label: String,
}

impl FixedResolver {
    /// Create a resolver for `locale`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocale` if the value is not a locale tag.
    pub fn new(locale: &str) -> Result<Self> {
        let normalized = normalize_locale(locale);
        if !is_valid_locale(&normalized) {
            return Err(LocaleError::InvalidLocale {
                value: locale.to_string(),
            });
        }

        Ok(Self {
            label: format!("fixed:{}", normalized),
            locale: normalized,
        })
    }

    /// The locale this resolver returns.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Resolver for FixedResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        Ok(Resolution::Found(self.locale.clone()))
    }
}
