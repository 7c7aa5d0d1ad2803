//! Priority-ordered resolver chain.
//!
//! [`AggregateResolver`] holds resolvers sorted by descending priority and
//! returns the first value any of them produces. It records which member
//! answered, or why none did, for diagnostics.

use std::cell::Cell;

use serde::Serialize;

use super::{Resolution, Resolver};
use crate::error::Result;

/// Priority used when a resolver is attached without one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Why the most recent resolution produced no value.
///
/// Serializes as its [`code`](Self::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// The chain has no members. This is a wiring defect.
    #[serde(rename = "no-resolvers-registered")]
    NoResolvers,
    /// Every member was consulted and none produced a value.
    #[serde(rename = "no-resolver-matched")]
    NotFound,
}

impl FailureReason {
    /// Stable identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoResolvers => "no-resolvers-registered",
            Self::NotFound => "no-resolver-matched",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoResolvers => write!(f, "no resolvers registered"),
            Self::NotFound => write!(f, "no resolver matched"),
        }
    }
}

/// A resolver paired with its priority.
pub struct PriorityEntry {
    priority: i32,
    resolver: Box<dyn Resolver>,
}

impl PriorityEntry {
    /// The priority this member was attached with.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The member itself.
    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }
}

/// One member's answer during a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Member name.
    pub resolver: String,
    /// Member priority.
    pub priority: i32,
    /// What the member returned.
    pub outcome: Resolution,
}

/// Result of a resolution pass, including the per-member attempt log.
///
/// Returned by [`AggregateResolver::resolve_report`], which leaves the
/// aggregate's own diagnostic fields untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// The resolved locale, if any.
    pub value: Option<String>,
    /// Name of the member that produced the value.
    pub resolved_by: Option<String>,
    /// Priority of the member that produced the value.
    pub priority: Option<i32>,
    /// Why nothing was resolved.
    pub failure: Option<FailureReason>,
    /// Members consulted, in the order they were asked.
    pub attempts: Vec<Attempt>,
    #[serde(skip)]
    winner: Option<usize>,
}

impl ResolutionReport {
    fn failed(reason: FailureReason, attempts: Vec<Attempt>) -> Self {
        Self {
            value: None,
            resolved_by: None,
            priority: None,
            failure: Some(reason),
            attempts,
            winner: None,
        }
    }

    /// Whether a value was resolved.
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// The outcome as a [`Resolution`].
    pub fn resolution(&self) -> Resolution {
        Resolution::from_option(self.value.clone())
    }
}

/// A resolver that delegates to a priority-ordered chain of resolvers.
///
/// Members are kept sorted by descending priority; members with equal
/// priority stay in attachment order. The last outcome is recorded in
/// [`last_successful_resolver`](Self::last_successful_resolver) and
/// [`last_failure`](Self::last_failure), which are reset at the start of
/// every call to [`Resolver::resolve`].
///
/// The diagnostic fields live in [`Cell`]s, so an aggregate cannot be
/// shared across threads. Build one per request, or call
/// [`resolve_report`](Self::resolve_report) which returns the outcome
/// instead of storing it.
///
/// ```compile_fail
/// use locale_chain::resolver::AggregateResolver;
///
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<AggregateResolver>();
/// ```
///
/// # Example
///
/// ```
/// use locale_chain::resolver::{AggregateResolver, FailureReason, FixedResolver, Resolver};
///
/// let mut chain = AggregateResolver::new();
/// assert_eq!(chain.resolve().unwrap().value(), None);
/// assert_eq!(chain.last_failure(), Some(FailureReason::NoResolvers));
///
/// chain
///     .attach(Box::new(FixedResolver::new("fr-FR").unwrap()), 1)
///     .attach(Box::new(FixedResolver::new("en-US").unwrap()), 10);
///
/// assert_eq!(chain.resolve().unwrap().value(), Some("en-US"));
/// assert_eq!(chain.last_failure(), None);
/// assert_eq!(chain.last_successful_resolver().unwrap().name(), "fixed:en-US");
/// ```
pub struct AggregateResolver {
    name: String,
    entries: Vec<PriorityEntry>,
    last_failure: Cell<Option<FailureReason>>,
    last_success: Cell<Option<usize>>,
}

impl AggregateResolver {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::named("aggregate")
    }

    /// Create an empty chain with a diagnostic name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            last_failure: Cell::new(None),
            last_success: Cell::new(None),
        }
    }

    /// Attach a resolver at the given priority.
    ///
    /// Higher priorities are tried first. A resolver attached at a priority
    /// already in use is tried after the existing members at that priority.
    pub fn attach(&mut self, resolver: Box<dyn Resolver>, priority: i32) -> &mut Self {
        let pos = self.entries.partition_point(|e| e.priority >= priority);
        tracing::trace!(
            "{}: attaching '{}' at priority {} (position {})",
            self.name,
            resolver.name(),
            priority,
            pos
        );
        self.entries.insert(pos, PriorityEntry { priority, resolver });

        // Keep the recorded winner pointing at the same member.
        if let Some(idx) = self.last_success.get() {
            if pos <= idx {
                self.last_success.set(Some(idx + 1));
            }
        }

        self
    }

    /// Attach a resolver at [`DEFAULT_PRIORITY`].
    pub fn attach_default(&mut self, resolver: Box<dyn Resolver>) -> &mut Self {
        self.attach(resolver, DEFAULT_PRIORITY)
    }

    /// Number of attached resolvers.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resolvers are attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Resolver> + '_ {
        self.entries.iter().map(PriorityEntry::resolver)
    }

    /// Members with their priorities, in resolution order.
    pub fn entries(&self) -> &[PriorityEntry] {
        &self.entries
    }

    /// The member that produced the value in the most recent resolution.
    pub fn last_successful_resolver(&self) -> Option<&dyn Resolver> {
        self.last_success
            .get()
            .and_then(|idx| self.entries.get(idx))
            .map(PriorityEntry::resolver)
    }

    /// Why the most recent resolution produced no value.
    pub fn last_failure(&self) -> Option<FailureReason> {
        self.last_failure.get()
    }

    /// Run a resolution pass and return its full outcome.
    ///
    /// Each member is consulted at most once. A member error is returned
    /// unchanged.
    pub fn resolve_report(&self) -> Result<ResolutionReport> {
        if self.entries.is_empty() {
            tracing::debug!("{}: no resolvers registered", self.name);
            return Ok(ResolutionReport::failed(FailureReason::NoResolvers, Vec::new()));
        }

        let mut attempts = Vec::with_capacity(self.entries.len());

        for (idx, entry) in self.entries.iter().enumerate() {
            let name = entry.resolver.name();
            let outcome = match entry.resolver.resolve()? {
                Resolution::Found(v) if v.trim().is_empty() => {
                    tracing::warn!("{}: '{}' returned an empty value", self.name, name);
                    Resolution::NotFound
                }
                other => other,
            };

            tracing::debug!(
                "{}: '{}' (priority {}) {}",
                self.name,
                name,
                entry.priority,
                outcome
            );

            attempts.push(Attempt {
                resolver: name.to_string(),
                priority: entry.priority,
                outcome: outcome.clone(),
            });

            if let Resolution::Found(value) = outcome {
                return Ok(ResolutionReport {
                    value: Some(value),
                    resolved_by: Some(name.to_string()),
                    priority: Some(entry.priority),
                    failure: None,
                    attempts,
                    winner: Some(idx),
                });
            }
        }

        tracing::debug!("{}: no resolver matched", self.name);
        Ok(ResolutionReport::failed(FailureReason::NotFound, attempts))
    }
}

impl Resolver for AggregateResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self) -> Result<Resolution> {
        self.last_failure.set(None);
        self.last_success.set(None);

        let report = self.resolve_report()?;
        self.last_failure.set(report.failure);
        self.last_success.set(report.winner);
        Ok(report.resolution())
    }
}

impl Default for AggregateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AggregateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: Vec<(i32, &str)> = self
            .entries
            .iter()
            .map(|e| (e.priority, e.resolver.name()))
            .collect();
        f.debug_struct("AggregateResolver")
            .field("name", &self.name)
            .field("members", &members)
            .field("last_failure", &self.last_failure.get())
            .field("last_success", &self.last_success.get())
            .finish()
    }
}

impl<'a> IntoIterator for &'a AggregateResolver {
    type Item = &'a dyn Resolver;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, PriorityEntry>,
        fn(&'a PriorityEntry) -> &'a dyn Resolver,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(PriorityEntry::resolver as fn(&'a PriorityEntry) -> &'a dyn Resolver)
    }
}
