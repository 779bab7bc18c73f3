use std::process::ExitCode;

/// Exit status of the credits CLI.
///
/// - `Success` (0): The credits were collected (and written, unless dry-run)
/// - `Error` (2): A stage failed (missing git, unreadable catalog, unwritable output, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed; nothing is retried and partial results are discarded.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
