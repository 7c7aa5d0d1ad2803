//! Shell completions generation.
//!
//! The `locale-chain completions` command generates shell completion scripts.

use std::io::Write;

use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::{Cli, CompletionsArgs};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "locale-chain", out);
        Ok(CommandResult::success())
    }
}
