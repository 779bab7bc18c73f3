//! Error types for the credits pipeline.
//!
//! None of these are recovered from: every stage propagates them up to the
//! binary, which prints the chain and exits with an error status.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreditsError {
    /// The version-control tool could not be spawned or rejected the repository.
    #[error("`{program} shortlog` failed in {}: {reason}", .repository.display())]
    ExternalTool {
        program: String,
        repository: PathBuf,
        reason: String,
    },

    /// A translation catalog could not be read.
    #[error("Failed to read catalog file: {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The credits file could not be written.
    #[error("Failed to write credits file: {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid catalog glob pattern \"{pattern}\": {message}")]
    Pattern { pattern: String, message: String },
}
