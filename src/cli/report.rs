//! Report formatting and printing utilities.
//!
//! Kept apart from the rewrite engine so gologfix can be used as a library.
//! Every printer has a `_to` variant taking a writer, for tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{FileFailure, FileRewrite, RunResults};
use crate::{config::CONFIG_FILE_NAME, core::RewriteEdit};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print the per-file status line used in verbose mode.
pub fn print_file_status(file: &FileRewrite, apply: bool) {
    print_file_status_to(file, apply, &mut io::stdout().lock());
}

pub fn print_file_status_to<W: Write>(file: &FileRewrite, apply: bool, writer: &mut W) {
    let calls = file.rewrite.edits.len();
    if file.rewrite.changed {
        let label = if apply { "fixed:" } else { "would fix:" };
        let _ = writeln!(
            writer,
            "{} {} ({} {})",
            label.green(),
            file.path,
            calls,
            plural(calls, "call", "calls")
        );
    } else {
        let _ = writeln!(writer, "{} {}", "unchanged:".dimmed(), file.path);
    }
}

/// Print every pending rewrite of a file (check mode).
pub fn print_edits(file: &FileRewrite) {
    print_edits_to(file, &mut io::stdout().lock());
}

pub fn print_edits_to<W: Write>(file: &FileRewrite, writer: &mut W) {
    for edit in &file.rewrite.edits {
        print_edit(&file.path, edit, writer);
    }
}

fn print_edit<W: Write>(path: &str, edit: &RewriteEdit, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: structured {} call can use a format string",
        "warning".bold().yellow(),
        edit.severity
    );
    let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, edit.line);
    for line in edit.original.lines() {
        let _ = writeln!(writer, "   {} {}", "-".red(), line.trim_end());
    }
    let _ = writeln!(writer, "   {} {}", "+".green(), edit.replacement);
    let _ = writeln!(writer);
}

/// Print files that could not be read or written.
pub fn print_failures(failures: &[FileFailure]) {
    print_failures_to(failures, &mut io::stderr().lock());
}

pub fn print_failures_to<W: Write>(failures: &[FileFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(
            writer,
            "{} {}: {:#}",
            "error:".bold().red(),
            failure.path,
            failure.error
        );
    }
}

/// Print where the configuration came from (verbose mode only).
pub fn print_config_source(from_file: bool, verbose: bool) {
    print_config_source_to(from_file, verbose, &mut io::stderr().lock());
}

pub fn print_config_source_to<W: Write>(from_file: bool, verbose: bool, writer: &mut W) {
    if !verbose {
        return;
    }
    if from_file {
        let _ = writeln!(writer, "{} using {}", "note:".bold(), CONFIG_FILE_NAME);
    } else {
        let _ = writeln!(
            writer,
            "{} no {} found, using defaults",
            "note:".bold(),
            CONFIG_FILE_NAME
        );
    }
}

/// Print a warning about paths that could not be accessed while scanning.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

/// Print the closing summary of a `fix` or `check` run.
pub fn print_summary(results: &RunResults, apply: bool) {
    print_summary_to(results, apply, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(results: &RunResults, apply: bool, writer: &mut W) {
    let scanned = results.files_scanned();
    let files = results.files_changed();
    let calls = results.calls_rewritten();

    if files == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} source {} - nothing to rewrite",
                scanned,
                plural(scanned, "file", "files")
            )
            .green()
        );
    } else if apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Rewrote {} {} in {} {}, scanned {} source {}",
                calls,
                plural(calls, "call", "calls"),
                files,
                plural(files, "file", "files"),
                scanned,
                plural(scanned, "file", "files")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {} would be rewritten. Run {} to apply.",
            FAILURE_MARK.red(),
            calls,
            plural(calls, "call", "calls"),
            files,
            plural(files, "file", "files"),
            "gologfix fix".cyan()
        );
    }
}
