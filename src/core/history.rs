//! Contributor discovery from version-control history.
//!
//! Authors are read from `git shortlog --no-merges -s`, which prints one
//! `<count>\t<name>` line per author, sorted by author name.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Result;

use crate::error::CreditsError;

/// Source of commit author names for a repository.
pub trait HistorySource {
    /// Authors of at least one non-merge commit, in the order the tool reports them.
    fn authors(&self, repository: &Path) -> Result<Vec<String>>;
}

/// Runs `<program> shortlog --no-merges -s HEAD` inside the repository.
#[derive(Debug, Clone)]
pub struct GitShortlog {
    program: PathBuf,
}

impl GitShortlog {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failure(&self, repository: &Path, reason: String) -> CreditsError {
        CreditsError::ExternalTool {
            program: self.program.display().to_string(),
            repository: repository.to_path_buf(),
            reason,
        }
    }
}

impl Default for GitShortlog {
    fn default() -> Self {
        Self::new("git")
    }
}

impl HistorySource for GitShortlog {
    fn authors(&self, repository: &Path) -> Result<Vec<String>> {
        // HEAD must be explicit: without a revision shortlog reads a log from
        // stdin whenever stdin is not a terminal.
        let output = Command::new(&self.program)
            .args(["shortlog", "--no-merges", "-s", "HEAD"])
            .current_dir(repository)
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .output()
            .map_err(|err| self.failure(repository, err.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self
                .failure(repository, format!("{} ({})", stderr.trim(), output.status))
                .into());
        }

        Ok(parse_shortlog(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Extract author names from shortlog summary output.
///
/// The name is everything after the first tab, minus the line terminator.
/// Lines without a tab carry no author and are skipped.
pub fn parse_shortlog(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .map(|(_, name)| name.trim_end_matches('\r').to_string())
        .collect()
}
