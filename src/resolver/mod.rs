//! Locale resolvers.
//!
//! A [`Resolver`] consults one source (a cookie, a query parameter, a
//! header, the process environment, ...) and reports a tri-state
//! [`Resolution`]. The [`AggregateResolver`] chains resolvers by priority
//! and returns the first value found:
//!
//! 1. Members are tried from highest to lowest priority
//! 2. Equal priorities are tried in the order they were attached
//! 3. `NotFound` and `Unsupported` both fall through to the next member
//! 4. The first `Found` wins and no further member is consulted

pub mod aggregate;
pub mod cookie;
pub mod env;
pub mod fixed;
pub mod header;
pub mod query;
pub mod session;

use serde::Serialize;

use crate::error::Result;
use crate::locale::{is_valid_locale, normalize_locale};

pub use aggregate::{
    AggregateResolver, Attempt, FailureReason, PriorityEntry, ResolutionReport, DEFAULT_PRIORITY,
};
pub use cookie::CookieResolver;
pub use env::EnvResolver;
pub use fixed::FixedResolver;
pub use header::HeaderResolver;
pub use query::QueryResolver;
pub use session::SessionResolver;

/// Outcome of a single resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution {
    /// The source produced a locale identifier.
    Found(String),
    /// The source is available but holds no value.
    NotFound,
    /// The source cannot be consulted in the current execution context.
    Unsupported,
}

impl Resolution {
    /// Build a `Found` result, mapping a blank value to `NotFound`.
    pub fn found(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::NotFound
        } else {
            Self::Found(value)
        }
    }

    /// Build a result from an optional value.
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::NotFound, Self::found)
    }

    /// Whether this is a usable `Found` value.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(v) if !v.trim().is_empty())
    }

    /// The found value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    /// Convert into the found value, if any.
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(v) => write!(f, "found '{}'", v),
            Self::NotFound => write!(f, "not found"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A single source of a locale identifier.
///
/// Absence of data is a normal outcome: return `Ok(Resolution::NotFound)`,
/// or `Ok(Resolution::Unsupported)` when the source does not exist in the
/// current context. Reserve `Err` for malformed underlying data; the
/// aggregate never swallows it.
pub trait Resolver {
    /// Label used in diagnostics and logs.
    fn name(&self) -> &str;

    /// Attempt to resolve a locale identifier.
    fn resolve(&self) -> Result<Resolution>;
}

/// Turn a raw value read from user-controlled input into a resolution.
///
/// Values are normalized first; values that do not look like a locale tag
/// are logged and treated as absent.
pub(crate) fn resolution_from_raw(source: &str, raw: Option<&str>) -> Resolution {
    let Some(raw) = raw else {
        return Resolution::NotFound;
    };

    let normalized = normalize_locale(raw);
    if normalized.is_empty() {
        return Resolution::NotFound;
    }

    if !is_valid_locale(&normalized) {
        tracing::warn!("{}: ignoring invalid locale value '{}'", source, raw);
        return Resolution::NotFound;
    }

    Resolution::Found(normalized)
}
