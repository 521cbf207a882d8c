use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): nothing left to rewrite, or all rewrites were written
/// - `Failure` (1): `check` found calls that would be rewritten
/// - `Error` (2): a file could not be read or written, or the run failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished run. I/O errors take precedence over pending rewrites.
    pub fn from_run(has_failures: bool, has_pending_rewrites: bool) -> Self {
        if has_failures {
            ExitStatus::Error
        } else if has_pending_rewrites {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
