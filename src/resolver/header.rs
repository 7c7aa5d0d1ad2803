//! `Accept-Language` header resolution.

use std::sync::Arc;

use super::{Resolution, Resolver};
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::locale::{normalize_locale, parse_accept_language};

/// Reads the preferred locale from an `Accept-Language` style header.
///
/// Without a supported list the best-weighted tag wins. With one, the
/// first tag (by weight) that matches a supported locale wins; a tag
/// matches on the full tag or on its primary language (`de-CH` matches a
/// supported `de`, and `de` matches a supported `de-DE`).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locale_chain::context::{ExecutionContext, RequestContext};
/// use locale_chain::resolver::{HeaderResolver, Resolution, Resolver};
///
/// let request = RequestContext::new().with_header("Accept-Language", "da, en-GB;q=0.8");
/// let ctx = Arc::new(ExecutionContext::Http(request));
///
/// let any = HeaderResolver::new(Arc::clone(&ctx));
/// assert_eq!(any.resolve().unwrap(), Resolution::Found("da".to_string()));
///
/// let limited = HeaderResolver::new(ctx).with_supported(["en-US", "fr-FR"]);
/// assert_eq!(limited.resolve().unwrap(), Resolution::Found("en-US".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct HeaderResolver {
    context: Arc<ExecutionContext>,
    header: String,
    supported: Vec<String>,
    label: String,
}

impl HeaderResolver {
    /// Header read when none is configured.
    pub const DEFAULT_HEADER: &'static str = "Accept-Language";

    /// Create a resolver reading [`DEFAULT_HEADER`](Self::DEFAULT_HEADER).
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self {
            context,
            header: Self::DEFAULT_HEADER.to_string(),
            supported: Vec::new(),
            label: format!("header:{}", Self::DEFAULT_HEADER),
        }
    }

    /// Read a different header.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self.label = format!("header:{}", self.header);
        self
    }

    /// Only accept locales from this list.
    pub fn with_supported<I, S>(mut self, supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supported = supported
            .into_iter()
            .map(|s| normalize_locale(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// The header this resolver reads.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Supported locales, empty when any locale is accepted.
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    fn pick(&self, tags: Vec<String>) -> Option<String> {
        if self.supported.is_empty() {
            return tags.into_iter().next();
        }

        tags.iter().find_map(|tag| {
            self.supported
                .iter()
                .find(|s| s.eq_ignore_ascii_case(tag))
                .or_else(|| {
                    let lang = primary_language(tag);
                    self.supported
                        .iter()
                        .find(|s| primary_language(s).eq_ignore_ascii_case(lang))
                })
                .cloned()
        })
    }
}

fn primary_language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

impl Resolver for HeaderResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        let Some(request) = self.context.request() else {
            return Ok(Resolution::Unsupported);
        };

        let Some(raw) = request.header(&self.header) else {
            return Ok(Resolution::NotFound);
        };

        let tags = parse_accept_language(raw);
        tracing::trace!("{}: parsed {:?}", self.label, tags);
        Ok(Resolution::from_option(self.pick(tags)))
    }
}
