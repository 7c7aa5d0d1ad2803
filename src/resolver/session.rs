//! Session-stored locale resolution.

use std::sync::Arc;

use super::{resolution_from_raw, Resolution, Resolver};
use crate::context::ExecutionContext;
use crate::error::Result;

/// Reads a locale previously stored in the user's session.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    context: Arc<ExecutionContext>,
    key: String,
    label: String,
}

impl SessionResolver {
    /// Session key read when none is configured.
    pub const DEFAULT_KEY: &'static str = "locale";

    /// Create a resolver reading [`DEFAULT_KEY`](Self::DEFAULT_KEY).
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self {
            context,
            key: Self::DEFAULT_KEY.to_string(),
            label: format!("session:{}", Self::DEFAULT_KEY),
        }
    }

    /// Read a different session key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self.label = format!("session:{}", self.key);
        self
    }

    /// The session key this resolver reads.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Resolver for SessionResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Result<Resolution> {
        match self.context.request() {
            Some(request) => Ok(resolution_from_raw(
                &self.label,
                request.session_value(&self.key),
            )),
            None => Ok(Resolution::Unsupported),
        }
    }
}
