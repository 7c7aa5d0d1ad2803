//! Resolve command implementation.
//!
//! The `locale-chain resolve` command wires the configured chain against
//! the request described on the command line and prints the result.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::ResolveArgs;
use crate::config::{build_chain, load_config};
use crate::context::{ExecutionContext, RequestContext};
use crate::error::{LocaleError, Result};
use crate::resolver::{ResolutionReport, Resolver};

/// Build the execution context described by the command-line inputs.
///
/// Returns [`ExecutionContext::Console`] when `--console` is set or no
/// request input is given.
pub fn build_context(args: &ResolveArgs) -> Result<ExecutionContext> {
    if args.console || !args.has_request_input() {
        return Ok(ExecutionContext::Console);
    }

    let mut request = RequestContext::new();

    if let Some(cookie) = &args.cookie {
        request = request.with_header("Cookie", cookie);
    }

    if let Some(query) = &args.query {
        request = request.with_query_string(query);
    }

    for header in &args.headers {
        let (name, value) = split_pair(header, ':', "expected 'Name: value'")?;
        request = request.with_header(name, value);
    }

    for entry in &args.session {
        let (key, value) = split_pair(entry, '=', "expected 'key=value'")?;
        request = request.with_session_value(key, value);
    }

    tracing::trace!("Request context: {:?}", request);
    Ok(ExecutionContext::Http(request))
}

fn split_pair<'a>(input: &'a str, separator: char, expected: &str) -> Result<(&'a str, &'a str)> {
    let invalid = || LocaleError::InvalidRequestInput {
        input: input.to_string(),
        message: expected.to_string(),
    };

    let (name, value) = input.split_once(separator).ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok((name, value.trim()))
}

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    fn write_trace(&self, report: &ResolutionReport, out: &mut dyn Write) -> Result<()> {
        for attempt in &report.attempts {
            writeln!(
                out,
                "  [{}] {}: {}",
                attempt.priority, attempt.resolver, attempt.outcome
            )?;
        }

        match (&report.value, &report.resolved_by, report.failure) {
            (Some(value), Some(by), _) => writeln!(out, "{} (from {})", value, by)?,
            (_, _, Some(reason)) => writeln!(out, "No locale resolved: {}", reason)?,
            _ => {}
        }
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(self.config.as_deref(), &self.project_root)?;
        let context = Arc::new(build_context(&self.args)?);
        let chain = build_chain(&config, context)?;

        if self.args.json || self.args.trace {
            let report = chain.resolve_report()?;
            if self.args.json {
                let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
                writeln!(out, "{}", json)?;
            } else {
                self.write_trace(&report, out)?;
            }

            return Ok(if report.is_resolved() {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        let resolution = chain.resolve()?;
        match (resolution.value(), chain.last_successful_resolver()) {
            (Some(value), Some(by)) => {
                tracing::debug!("Resolved '{}' via {}", value, by.name());
                writeln!(out, "{}", value)?;
                Ok(CommandResult::success())
            }
            _ => {
                let reason = chain
                    .last_failure()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                writeln!(out, "No locale resolved: {}", reason)?;
                Ok(CommandResult::failure(1))
            }
        }
    }
}
