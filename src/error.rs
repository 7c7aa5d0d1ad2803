//! Error types for locale-chain operations.
//!
//! This module defines [`LocaleError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A source with no value, or a source that cannot be consulted in the
//!   current context, is a [`Resolution`](crate::resolver::Resolution),
//!   never an error
//! - Use `LocaleError` for defects: bad configuration, malformed input data
//! - Use `anyhow::Error` (via `LocaleError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for locale-chain operations.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A locale identifier supplied by configuration is not a valid tag.
    #[error("Invalid locale identifier: '{value}'")]
    InvalidLocale { value: String },

    /// A cookie header could not be parsed.
    #[error("Malformed cookie header: {message}")]
    MalformedCookie { message: String },

    /// A request input passed on the command line could not be parsed.
    #[error("Invalid request input '{input}': {message}")]
    InvalidRequestInput { input: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for locale-chain operations.
pub type Result<T> = std::result::Result<T, LocaleError>;
