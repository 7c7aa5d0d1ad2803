//! Sources command implementation.
//!
//! The `locale-chain sources` command lists the configured resolvers in the
//! order they are consulted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::SourcesArgs;
use crate::config::{build_chain, load_config};
use crate::context::ExecutionContext;
use crate::error::Result;

/// The sources command implementation.
pub struct SourcesCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: SourcesArgs,
}

impl SourcesCommand {
    /// Create a new sources command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: SourcesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for SourcesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(self.config.as_deref(), &self.project_root)?;
        let chain = build_chain(&config, Arc::new(ExecutionContext::Console))?;

        if self.args.json {
            let entries: Vec<_> = chain
                .entries()
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    json!({
                        "position": idx + 1,
                        "name": entry.resolver().name(),
                        "priority": entry.priority(),
                    })
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", rendered)?;
            return Ok(CommandResult::success());
        }

        if chain.is_empty() {
            writeln!(out, "No sources configured.")?;
            return Ok(CommandResult::success());
        }

        for (idx, entry) in chain.entries().iter().enumerate() {
            writeln!(
                out,
                "{}. {} (priority {})",
                idx + 1,
                entry.resolver().name(),
                entry.priority()
            )?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(config: Option<&str>, json: bool) -> String {
        let temp = TempDir::new().unwrap();
        if let Some(config) = config {
            fs::write(temp.path().join(crate::config::CONFIG_FILE), config).unwrap();
        }
        let cmd = SourcesCommand::new(temp.path(), None, SourcesArgs { json });
        let mut out = Vec::new();
        assert!(cmd.execute(&mut out).unwrap().success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_builtin_chain() {
        insta::assert_snapshot!(run(None, false), @r"
        1. cookie:xo.locale (priority 40)
        2. query:locale (priority 30)
        3. session:locale (priority 20)
        4. header:Accept-Language (priority 10)
        5. env (priority 0)
        ");
    }

    #[test]
    fn lists_configured_chain_in_resolution_order() {
        let config = "default_locale: en\nsources:\n  - type: query\n  - type: cookie\n    priority: 9\n";
        let out = run(Some(config), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1. cookie:xo.locale (priority 9)",
                "2. query:locale (priority 1)",
                "3. fixed:en (priority -2147483648)",
            ]
        );
    }

    #[test]
    fn empty_chain() {
        assert_eq!(run(Some("sources: []\n"), false), "No sources configured.\n");
    }

    #[test]
    fn json_output() {
        let out = run(Some("sources:\n  - type: env\n    priority: -3\n"), true);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"position": 1, "name": "env", "priority": -3}])
        );
    }
}
