//! Configuration schema definitions.
//!
//! Maps the YAML structure of `.locale-chain.yml` onto Rust types.

use serde::{Deserialize, Serialize};

use crate::resolver::DEFAULT_PRIORITY;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale returned when no source matches.
    ///
    /// Attached as a fixed resolver at the lowest possible priority.
    pub default_locale: Option<String>,

    /// Sources to consult.
    pub sources: Vec<SourceConfig>,
}

impl LocaleConfig {
    /// The chain used when no configuration file exists.
    ///
    /// Cookie (40), query (30), session (20), `Accept-Language` (10) and the
    /// process environment (0), with no default locale.
    pub fn builtin() -> Self {
        Self {
            default_locale: None,
            sources: vec![
                SourceConfig::Cookie {
                    name: None,
                    priority: 40,
                },
                SourceConfig::Query {
                    param: None,
                    priority: 30,
                },
                SourceConfig::Session {
                    key: None,
                    priority: 20,
                },
                SourceConfig::Header {
                    name: None,
                    supported: Vec::new(),
                    priority: 10,
                },
                SourceConfig::Env {
                    vars: Vec::new(),
                    priority: 0,
                },
            ],
        }
    }
}

/// A single locale source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SourceConfig {
    /// A request cookie.
    Cookie {
        /// Cookie name (default `xo.locale`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default = "default_priority")]
        priority: i32,
    },

    /// A query parameter.
    Query {
        /// Parameter name (default `locale`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        param: Option<String>,
        #[serde(default = "default_priority")]
        priority: i32,
    },

    /// A request header carrying a weighted language list.
    Header {
        /// Header name (default `Accept-Language`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Locales the application supports; empty accepts any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        supported: Vec<String>,
        #[serde(default = "default_priority")]
        priority: i32,
    },

    /// A session value.
    Session {
        /// Session key (default `locale`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default = "default_priority")]
        priority: i32,
    },

    /// Process environment variables.
    Env {
        /// Variables to consult in order (default `LC_ALL`, `LC_MESSAGES`, `LANG`).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        vars: Vec<String>,
        #[serde(default = "default_priority")]
        priority: i32,
    },

    /// A fixed locale.
    Fixed {
        value: String,
        #[serde(default = "default_priority")]
        priority: i32,
    },
}

impl SourceConfig {
    /// The configured priority.
    pub fn priority(&self) -> i32 {
        match self {
            Self::Cookie { priority, .. }
            | Self::Query { priority, .. }
            | Self::Header { priority, .. }
            | Self::Session { priority, .. }
            | Self::Env { priority, .. }
            | Self::Fixed { priority, .. } => *priority,
        }
    }

    /// The source type as written in YAML.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cookie { .. } => "cookie",
            Self::Query { .. } => "query",
            Self::Header { .. } => "header",
            Self::Session { .. } => "session",
            Self::Env { .. } => "env",
            Self::Fixed { .. } => "fixed",
        }
    }
}
