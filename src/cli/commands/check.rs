//! Check command - Preview the rewrites `fix` would make.
//!
//! Nothing is written. Exits with [`ExitStatus::Failure`] when at least one
//! call would be rewritten, so it can gate CI.

use anyhow::Result;

use super::{
    super::{args::CheckCommand, exit_status::ExitStatus, report},
    RunContext,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;
    let results = ctx.rewrite_all(false);

    for file in &results.rewrites {
        if ctx.verbose {
            report::print_file_status(file, false);
        }
        report::print_edits(file);
    }

    report::print_failures(&results.failures);
    report::print_summary(&results, false);

    Ok(ExitStatus::from_run(
        !results.failures.is_empty(),
        results.files_changed() > 0,
    ))
}
