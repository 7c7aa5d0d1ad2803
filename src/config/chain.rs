//! Wiring a resolver chain from configuration.

use std::sync::Arc;

use crate::config::schema::{LocaleConfig, SourceConfig};
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::resolver::{
    AggregateResolver, CookieResolver, EnvResolver, FixedResolver, HeaderResolver, QueryResolver,
    Resolver, SessionResolver,
};

/// Priority of the `default_locale` fallback; below every configured source.
pub const FALLBACK_PRIORITY: i32 = i32::MIN;

/// Build the resolver for a single source.
pub fn build_source(
    source: &SourceConfig,
    context: &Arc<ExecutionContext>,
) -> Result<Box<dyn Resolver>> {
    let resolver: Box<dyn Resolver> = match source {
        SourceConfig::Cookie { name, .. } => {
            let mut r = CookieResolver::new(Arc::clone(context));
            if let Some(name) = name {
                r = r.with_cookie_name(name.trim());
            }
            Box::new(r)
        }
        SourceConfig::Query { param, .. } => {
            let mut r = QueryResolver::new(Arc::clone(context));
            if let Some(param) = param {
                r = r.with_param(param.trim());
            }
            Box::new(r)
        }
        SourceConfig::Header {
            name, supported, ..
        } => {
            let mut r = HeaderResolver::new(Arc::clone(context)).with_supported(supported);
            if let Some(name) = name {
                r = r.with_header(name.trim());
            }
            Box::new(r)
        }
        SourceConfig::Session { key, .. } => {
            let mut r = SessionResolver::new(Arc::clone(context));
            if let Some(key) = key {
                r = r.with_key(key.trim());
            }
            Box::new(r)
        }
        SourceConfig::Env { vars, .. } => {
            let mut r = EnvResolver::new();
            if !vars.is_empty() {
                r = r.with_vars(vars.iter().map(|v| v.trim().to_string()));
            }
            Box::new(r)
        }
        SourceConfig::Fixed { value, .. } => Box::new(FixedResolver::new(value)?),
    };

    Ok(resolver)
}

/// Build the resolver chain described by `config`.
///
/// Sources are attached in file order, so sources sharing a priority are
/// tried in the order they are listed. `default_locale`, when set, is
/// attached last at [`FALLBACK_PRIORITY`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locale_chain::config::{build_chain, LocaleConfig};
/// use locale_chain::context::{ExecutionContext, RequestContext};
/// use locale_chain::resolver::Resolver;
///
/// let config: LocaleConfig = serde_yaml::from_str(
///     "default_locale: en-US\nsources:\n  - type: query\n    priority: 5\n",
/// ).unwrap();
///
/// let request = RequestContext::new().with_query_string("locale=fr");
/// let chain = build_chain(&config, Arc::new(ExecutionContext::Http(request))).unwrap();
/// assert_eq!(chain.resolve().unwrap().value(), Some("fr"));
///
/// let chain = build_chain(&config, Arc::new(ExecutionContext::Console)).unwrap();
/// assert_eq!(chain.resolve().unwrap().value(), Some("en-US"));
/// ```
pub fn build_chain(
    config: &LocaleConfig,
    context: Arc<ExecutionContext>,
) -> Result<AggregateResolver> {
    let mut chain = AggregateResolver::named("locale");

    for source in &config.sources {
        chain.attach(build_source(source, &context)?, source.priority());
    }

    if let Some(locale) = &config.default_locale {
        chain.attach(Box::new(FixedResolver::new(locale)?), FALLBACK_PRIORITY);
    }

    tracing::debug!(
        "Built locale chain with {} resolver(s) ({} context)",
        chain.count(),
        if context.is_console() { "console" } else { "http" }
    );

    Ok(chain)
}
