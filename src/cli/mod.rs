//! Command-line interface for locale-chain.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ResolveArgs, SourcesArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
