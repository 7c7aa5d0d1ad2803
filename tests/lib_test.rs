//! Library integration tests: resolvers defined outside the crate plugged
//! into chains built from configuration.

use std::sync::Arc;

use locale_chain::config::{build_chain, LocaleConfig, SourceConfig};
use locale_chain::context::{ExecutionContext, RequestContext};
use locale_chain::resolver::{AggregateResolver, FailureReason, Resolution, Resolver};
use locale_chain::{LocaleError, Result};

/// Reads the preferred locale from a user profile.
struct ProfileResolver {
    preferred: Option<&'static str>,
}

impl Resolver for ProfileResolver {
    fn name(&self) -> &str {
        "profile"
    }

    fn resolve(&self) -> Result<Resolution> {
        Ok(Resolution::from_option(self.preferred.map(str::to_string)))
    }
}

/// A profile store that cannot be reached.
struct OfflineStore;

impl Resolver for OfflineStore {
    fn name(&self) -> &str {
        "profile-store"
    }

    fn resolve(&self) -> Result<Resolution> {
        Err(anyhow::anyhow!("profile store offline").into())
    }
}

fn query_config() -> LocaleConfig {
    LocaleConfig {
        default_locale: Some("en-US".to_string()),
        sources: vec![SourceConfig::Query {
            param: None,
            priority: 10,
        }],
    }
}

fn http(query: &str) -> Arc<ExecutionContext> {
    Arc::new(ExecutionContext::Http(
        RequestContext::new().with_query_string(query),
    ))
}

#[test]
fn custom_resolver_joins_configured_chain() -> Result<()> {
    let mut chain = build_chain(&query_config(), http("locale=fr"))?;
    chain.attach(
        Box::new(ProfileResolver {
            preferred: Some("de-AT"),
        }),
        100,
    );

    assert_eq!(chain.resolve()?.value(), Some("de-AT"));
    assert_eq!(chain.last_successful_resolver().map(|r| r.name()), Some("profile"));
    Ok(())
}

#[test]
fn custom_resolver_without_value_falls_through() -> Result<()> {
    let mut chain = build_chain(&query_config(), http("locale=fr"))?;
    chain.attach(Box::new(ProfileResolver { preferred: None }), 100);

    let report = chain.resolve_report()?;
    assert_eq!(report.value.as_deref(), Some("fr"));
    assert_eq!(report.resolved_by.as_deref(), Some("query:locale"));
    let asked: Vec<_> = report.attempts.iter().map(|a| a.resolver.as_str()).collect();
    assert_eq!(asked, vec!["profile", "query:locale"]);
    Ok(())
}

#[test]
fn configured_chain_nests_in_application_chain() -> Result<()> {
    let configured = build_chain(&query_config(), Arc::new(ExecutionContext::Console))?;

    let mut app = AggregateResolver::named("app");
    app.attach(Box::new(ProfileResolver { preferred: None }), 10)
        .attach(Box::new(configured), 1);

    assert_eq!(app.resolve()?, Resolution::Found("en-US".to_string()));
    assert_eq!(app.last_successful_resolver().map(|r| r.name()), Some("locale"));
    Ok(())
}

#[test]
fn custom_resolver_error_reaches_caller() -> Result<()> {
    let mut chain = build_chain(&query_config(), http("locale=fr"))?;
    chain.attach(Box::new(OfflineStore), 100);

    let err = chain.resolve().unwrap_err();
    assert!(matches!(err, LocaleError::Other(_)));
    assert_eq!(err.to_string(), "profile store offline");
    assert!(chain.last_failure().is_none());
    assert!(chain.last_successful_resolver().is_none());
    Ok(())
}

#[test]
fn empty_configuration_builds_empty_chain() -> Result<()> {
    let chain = build_chain(&LocaleConfig::default(), Arc::new(ExecutionContext::Console))?;

    assert!(chain.is_empty());
    assert_eq!(chain.resolve()?, Resolution::NotFound);
    assert_eq!(chain.last_failure(), Some(FailureReason::NoResolvers));
    Ok(())
}
