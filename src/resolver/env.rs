//! Process-environment locale resolution.

use super::{resolution_from_raw, Resolution, Resolver};
use crate::error::Result;

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Reads the locale from POSIX locale variables.
///
/// The first variable that is set to a non-empty value decides: `C` and
/// `POSIX` mean "no preference" and yield `NotFound`, anything else is
/// normalized (`en_US.UTF-8` becomes `en-US`). Works in every context.
///
/// # Example
///
/// ```
/// use locale_chain::resolver::{EnvResolver, Resolution, Resolver};
///
/// let resolver = EnvResolver::new().with_lookup(|key| match key {
///     "LANG" => Some("sv_SE.UTF-8".to_string()),
///     _ => None,
/// });
/// assert_eq!(resolver.resolve().unwrap(), Resolution::Found("sv-SE".to_string()));
/// ```
pub struct EnvResolver {
    vars: Vec<String>,
    lookup: EnvLookup,
    label: String,
}

impl EnvResolver {
    /// Variables consulted when none are configured, in order.
    pub const DEFAULT_VARS: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

    /// Create a resolver reading [`DEFAULT_VARS`](Self::DEFAULT_VARS) from
    /// the process environment.
    pub fn new() -> Self {
        Self {
            vars: Self::DEFAULT_VARS.iter().map(|v| v.to_string()).collect(),
            lookup: Box::new(|key| std::env::var(key).ok()),
            label: "env".to_string(),
        }
    }

    /// Consult these variables instead, in order.
    pub fn with_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vars = vars.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the environment lookup (for testing).
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    /// The variables consulted, in order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvResolver")
            .field("vars", &self.vars)
            .finish_non_exhaustive()
    }
}

impl Resolver for EnvResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        let hit = self.vars.iter().find_map(|var| {
            (self.lookup)(var)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (var, v))
        });

        let Some((var, value)) = hit else {
            return Ok(Resolution::NotFound);
        };

        tracing::trace!("env: {} = {}", var, value);
        if matches!(value.trim(), "C" | "POSIX") || value.trim().starts_with("C.") {
            return Ok(Resolution::NotFound);
        }

        Ok(resolution_from_raw(&self.label, Some(&value)))
    }
}
