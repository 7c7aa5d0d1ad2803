//! locale-chain - Priority-ordered locale resolution.
//!
//! A locale preference can live in many places: a cookie, a query
//! parameter, the session, the `Accept-Language` header, the process
//! environment. This crate queries such sources in priority order and
//! returns the first value found, recording which source answered or why
//! none did.
//!
//! # Modules
//!
//! - [`resolver`] - The resolver contract, the aggregate chain and built-in sources
//! - [`context`] - Request/console context read by the built-in sources
//! - [`locale`] - Locale normalization, validation and `Accept-Language` parsing
//! - [`config`] - Configuration loading, validation and chain wiring
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use locale_chain::context::{ExecutionContext, RequestContext};
//! use locale_chain::resolver::{
//!     AggregateResolver, CookieResolver, FixedResolver, HeaderResolver, Resolver,
//! };
//!
//! let request = RequestContext::new().with_header("Accept-Language", "pt-BR, en;q=0.7");
//! let ctx = Arc::new(ExecutionContext::Http(request));
//!
//! let mut chain = AggregateResolver::new();
//! chain
//!     .attach(Box::new(CookieResolver::new(Arc::clone(&ctx))), 20)
//!     .attach(Box::new(HeaderResolver::new(ctx)), 10)
//!     .attach(Box::new(FixedResolver::new("en-US").unwrap()), 0);
//!
//! assert_eq!(chain.resolve().unwrap().value(), Some("pt-BR"));
//! assert_eq!(
//!     chain.last_successful_resolver().unwrap().name(),
//!     "header:Accept-Language"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod locale;
pub mod resolver;

pub use error::{LocaleError, Result};
