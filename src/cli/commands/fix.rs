//! Fix command - Rewrite structured logger calls in place.
//!
//! Every selected file goes through the four-stage rewrite pass. Files whose
//! text changed are written back; all others are left untouched.

use anyhow::Result;

use super::{
    super::{args::FixCommand, exit_status::ExitStatus, report},
    RunContext,
};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;
    let results = ctx.rewrite_all(true);

    if ctx.verbose {
        for file in &results.rewrites {
            report::print_file_status(file, true);
        }
    }

    report::print_failures(&results.failures);
    report::print_summary(&results, true);

    Ok(ExitStatus::from_run(!results.failures.is_empty(), false))
}
