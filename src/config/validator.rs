//! Configuration validation rules.
//!
//! - `default_locale` and fixed values must be locale tags
//! - Source identifiers (cookie name, parameter, header, key, variables)
//!   must not be blank
//! - Supported header locales must be locale tags

use crate::config::schema::{LocaleConfig, SourceConfig};
use crate::error::{LocaleError, Result};
use crate::locale::{is_valid_locale, normalize_locale};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Index of the offending entry in `sources`, if source-specific
    pub source_index: Option<usize>,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &LocaleConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(locale) = &config.default_locale {
        if !is_valid_locale(&normalize_locale(locale)) {
            errors.push(ValidationError {
                rule: "invalid-default-locale".to_string(),
                message: format!("default_locale '{}' is not a valid locale", locale),
                source_index: None,
            });
        }
    }

    for (idx, source) in config.sources.iter().enumerate() {
        errors.extend(validate_source(idx, source));
    }

    errors
}

fn validate_source(idx: usize, source: &SourceConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let blank = |field: &str| ValidationError {
        rule: "blank-identifier".to_string(),
        message: format!("sources[{}] ({}): '{}' must not be blank", idx, source.kind(), field),
        source_index: Some(idx),
    };

    match source {
        SourceConfig::Cookie { name: Some(v), .. } if v.trim().is_empty() => {
            errors.push(blank("name"))
        }
        SourceConfig::Query { param: Some(v), .. } if v.trim().is_empty() => {
            errors.push(blank("param"))
        }
        SourceConfig::Session { key: Some(v), .. } if v.trim().is_empty() => {
            errors.push(blank("key"))
        }
        SourceConfig::Header {
            name, supported, ..
        } => {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                errors.push(blank("name"));
            }
            for locale in supported {
                if !is_valid_locale(&normalize_locale(locale)) {
                    errors.push(ValidationError {
                        rule: "invalid-supported-locale".to_string(),
                        message: format!(
                            "sources[{}] (header): supported locale '{}' is not a valid locale",
                            idx, locale
                        ),
                        source_index: Some(idx),
                    });
                }
            }
        }
        SourceConfig::Env { vars, .. } if vars.iter().any(|v| v.trim().is_empty()) => {
            errors.push(blank("vars"))
        }
        SourceConfig::Fixed { value, .. } if !is_valid_locale(&normalize_locale(value)) => {
            errors.push(ValidationError {
                rule: "invalid-fixed-locale".to_string(),
                message: format!(
                    "sources[{}] (fixed): '{}' is not a valid locale",
                    idx, value
                ),
                source_index: Some(idx),
            });
        }
        _ => {}
    }

    errors
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &LocaleConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LocaleError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
