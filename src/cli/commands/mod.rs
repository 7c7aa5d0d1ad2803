//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and writes its output to
//! the writer it is handed, which keeps commands testable without a
//! terminal. [`CommandDispatcher`] routes subcommands to implementations.

pub mod completions;
pub mod dispatcher;
pub mod resolve;
pub mod sources;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
