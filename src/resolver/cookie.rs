//! Cookie-based locale resolution.

use std::sync::Arc;

use super::{resolution_from_raw, Resolution, Resolver};
use crate::context::ExecutionContext;
use crate::error::Result;

/// Reads the locale from a request cookie.
///
/// Returns `Unsupported` in a console context, where there are no cookies
/// to read.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locale_chain::context::{ExecutionContext, RequestContext};
/// use locale_chain::resolver::{CookieResolver, Resolution, Resolver};
///
/// let request = RequestContext::new().with_cookie("xo.locale", "de_AT");
/// let resolver = CookieResolver::new(Arc::new(ExecutionContext::Http(request)));
/// assert_eq!(resolver.resolve().unwrap(), Resolution::Found("de-AT".to_string()));
///
/// let console = CookieResolver::new(Arc::new(ExecutionContext::Console));
/// assert_eq!(console.resolve().unwrap(), Resolution::Unsupported);
/// ```
#[derive(Debug, Clone)]
pub struct CookieResolver {
    context: Arc<ExecutionContext>,
    cookie_name: String,
    label: String,
}

impl CookieResolver {
    /// Cookie read when no name is configured.
    pub const DEFAULT_COOKIE_NAME: &'static str = "xo.locale";

    /// Create a resolver reading [`DEFAULT_COOKIE_NAME`](Self::DEFAULT_COOKIE_NAME).
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self {
            context,
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            label: format!("cookie:{}", Self::DEFAULT_COOKIE_NAME),
        }
    }

    /// Read a different cookie.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self.label = format!("cookie:{}", self.cookie_name);
        self
    }

    /// The cookie this resolver reads.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl Resolver for CookieResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        let Some(request) = self.context.request() else {
            return Ok(Resolution::Unsupported);
        };

        let value = request.cookie(&self.cookie_name)?;
        Ok(resolution_from_raw(&self.label, value.as_deref()))
    }
}
