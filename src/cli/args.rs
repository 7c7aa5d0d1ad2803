//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// locale-chain - Resolve a locale from prioritized sources.
#[derive(Debug, Parser)]
#[command(name = "locale-chain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .locale-chain.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the locale (default if no command specified)
    Resolve(ResolveArgs),

    /// List the configured sources in resolution order
    Sources(SourcesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
///
/// Without any request input the resolution runs in a console context,
/// where request-bound sources report themselves unsupported.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Raw Cookie header, e.g. "xo.locale=de-DE; theme=dark"
    #[arg(long)]
    pub cookie: Option<String>,

    /// Raw query string, e.g. "locale=fr&page=2"
    #[arg(long)]
    pub query: Option<String>,

    /// Request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Session value as "key=value" (repeatable)
    #[arg(long = "session")]
    pub session: Vec<String>,

    /// Resolve as a console process even if request input is given
    #[arg(long)]
    pub console: bool,

    /// Output the full resolution report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show every source consulted
    #[arg(long)]
    pub trace: bool,
}

impl ResolveArgs {
    /// Whether any request input was supplied.
    pub fn has_request_input(&self) -> bool {
        self.cookie.is_some()
            || self.query.is_some()
            || !self.headers.is_empty()
            || !self.session.is_empty()
    }
}

/// Arguments for the `sources` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourcesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["locale-chain"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "locale-chain",
            "--config",
            "custom.yml",
            "--project",
            "/app",
            "--debug",
            "sources",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(cli.project, Some(PathBuf::from("/app")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Sources(_))));
    }

    #[test]
    fn resolve_parses_request_inputs() {
        let cli = Cli::parse_from([
            "locale-chain",
            "resolve",
            "--cookie",
            "xo.locale=de",
            "--query",
            "locale=fr",
            "-H",
            "Accept-Language: en",
            "--header",
            "X-Lang: it",
            "--session",
            "locale=es",
            "--trace",
        ]);
        let Some(Commands::Resolve(args)) = cli.command else {
            panic!("Expected Resolve command");
        };
        assert_eq!(args.cookie.as_deref(), Some("xo.locale=de"));
        assert_eq!(args.query.as_deref(), Some("locale=fr"));
        assert_eq!(args.headers, vec!["Accept-Language: en", "X-Lang: it"]);
        assert_eq!(args.session, vec!["locale=es"]);
        assert!(args.trace);
        assert!(!args.json);
        assert!(args.has_request_input());
    }

    #[test]
    fn resolve_without_input_has_no_request() {
        let cli = Cli::parse_from(["locale-chain", "resolve", "--json"]);
        let Some(Commands::Resolve(args)) = cli.command else {
            panic!("Expected Resolve command");
        };
        assert!(args.json);
        assert!(!args.has_request_input());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["locale-chain", "sources", "--json", "--debug"]);
        assert!(cli.debug);
        let Some(Commands::Sources(args)) = cli.command else {
            panic!("Expected Sources command");
        };
        assert!(args.json);
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["locale-chain", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Bash }))
        ));
    }
}
