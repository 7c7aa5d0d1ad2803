//! Configuration loading, validation and chain wiring.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//! - Building a resolver chain in [`chain`]
//!
//! # Example
//!
//! ```
//! use locale_chain::config::{load_config, CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(CONFIG_FILE),
//!     "default_locale: en-US\nsources:\n  - type: cookie\n    priority: 10\n",
//! ).unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.default_locale.as_deref(), Some("en-US"));
//! assert_eq!(config.sources.len(), 1);
//! ```

pub mod chain;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use chain::{build_chain, build_source, FALLBACK_PRIORITY};
pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths, CONFIG_FILE, LOCAL_CONFIG_FILE,
};
pub use merger::{apply_override, layer_configs, SOURCES_KEY};
pub use schema::{LocaleConfig, SourceConfig};
pub use validator::{validate, validate_config, ValidationError};
