//! Query-parameter locale resolution.

use std::sync::Arc;

use super::{resolution_from_raw, Resolution, Resolver};
use crate::context::ExecutionContext;
use crate::error::Result;

/// Reads the locale from a query parameter such as `?locale=fr`.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    context: Arc<ExecutionContext>,
    param: String,
    label: String,
}

impl QueryResolver {
    /// Parameter read when none is configured.
    pub const DEFAULT_PARAM: &'static str = "locale";

    /// Create a resolver reading [`DEFAULT_PARAM`](Self::DEFAULT_PARAM).
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self {
            context,
            param: Self::DEFAULT_PARAM.to_string(),
            label: format!("query:{}", Self::DEFAULT_PARAM),
        }
    }

    /// Read a different parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self.label = format!("query:{}", self.param);
        self
    }

    /// The parameter this resolver reads.
    pub fn param(&self) -> &str {
        &self.param
    }
}

impl Resolver for QueryResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        match self.context.request() {
            Some(request) => Ok(resolution_from_raw(
                &self.label,
                request.query_param(&self.param),
            )),
            None => Ok(Resolution::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;

    fn http(query: &str) -> Arc<ExecutionContext> {
        Arc::new(ExecutionContext::Http(
            RequestContext::new().with_query_string(query),
        ))
    }

    #[test]
    fn reads_default_param() {
        let resolver = QueryResolver::new(http("locale=es-MX"));
        assert_eq!(resolver.param(), "locale");
        assert_eq!(
            resolver.resolve().unwrap(),
            Resolution::Found("es-MX".to_string())
        );
    }

    #[test]
    fn reads_custom_param() {
        let resolver = QueryResolver::new(http("lang=uk&locale=en")).with_param("lang");
        assert_eq!(resolver.name(), "query:lang");
        assert_eq!(resolver.resolve().unwrap(), Resolution::Found("uk".to_string()));
    }

    #[test]
    fn missing_or_empty_param_is_not_found() {
        assert_eq!(
            QueryResolver::new(http("page=1")).resolve().unwrap(),
            Resolution::NotFound
        );
        assert_eq!(
            QueryResolver::new(http("locale=")).resolve().unwrap(),
            Resolution::NotFound
        );
    }

    #[test]
    fn unsupported_on_console() {
        let resolver = QueryResolver::new(Arc::new(ExecutionContext::Console));
        assert_eq!(resolver.resolve().unwrap(), Resolution::Unsupported);
    }
}
