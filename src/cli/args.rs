//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `fix`: Rewrite structured logger calls and write changed files back
//! - `check`: Show the rewrites `fix` would make, without touching any file
//! - `init`: Initialize gologfix configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments shared by `fix` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Files, directories or glob patterns to scan (overrides config `includes`)
    pub paths: Vec<String>,

    /// Name of the logger field on the receiver (overrides config file)
    #[arg(long)]
    pub logger_field: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite structured logger calls into format-string calls
    Fix(FixCommand),
    /// Report logger calls that would be rewritten (dry-run, exits 1 if any)
    Check(CheckCommand),
    /// Initialize a new .gologfixrc.json configuration file
    Init,
}
