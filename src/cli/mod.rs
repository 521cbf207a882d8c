use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, fix::fix, init::init};

pub mod args;
pub mod commands;
mod exit_status;
mod report;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Fix(cmd)) => fix(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
