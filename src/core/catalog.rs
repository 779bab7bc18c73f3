//! Translator discovery from gettext catalog headers.
//!
//! A catalog credits its translators in a header block:
//!
//! ```text
//! # Translators:
//! # Carol Carlson <carol@example.com>, 2020
//! # Dave Davidson, 2019
//!
//! msgid ""
//! ```
//!
//! The block starts at the line containing `# Translators:` and ends at the
//! first blank line.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use glob::glob;

use crate::error::CreditsError;

const TRANSLATORS_MARKER: &str = "# Translators:";

/// gettext machine comments: references, flags, extracted notes, previous msgids.
const MACHINE_COMMENT_PREFIXES: &[&str] = &["#:", "#,", "#.", "#|"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    Inside,
}

/// Extract translator names from the content of one catalog, in file order.
pub fn extract_translators(content: &str) -> Vec<String> {
    let mut state = BlockState::Outside;
    let mut names = Vec::new();

    for line in content.lines() {
        match state {
            BlockState::Outside => {
                if line.contains(TRANSLATORS_MARKER) {
                    state = BlockState::Inside;
                }
            }
            BlockState::Inside => {
                if line.trim().is_empty() {
                    state = BlockState::Outside;
                } else if let Some(name) = attribution_name(line) {
                    names.push(name.to_string());
                }
            }
        }
    }

    names
}

/// Name from a `# <name>, <years>` or `# <name> <email>` attribution line.
///
/// The name ends at the first `,` or ` <`. Without either delimiter the
/// whole remainder of the line is taken.
fn attribution_name(line: &str) -> Option<&str> {
    if !line.starts_with('#')
        || MACHINE_COMMENT_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
    {
        return None;
    }

    let rest = match line.find("# ") {
        Some(pos) => &line[pos + 2..],
        None => &line[1..],
    };
    let end = [rest.find(','), rest.find(" <")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

    let name = rest[..end].trim();
    (!name.is_empty()).then_some(name)
}

/// Expand a glob pattern relative to the project root into sorted paths.
///
/// Every match is returned, including directories and dangling links, so
/// that reading it fails the scan instead of silently dropping it.
pub fn find_catalogs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = root.join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let entries = glob(&pattern_str).map_err(|err| CreditsError::Pattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| CreditsError::FileAccess {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Read a catalog and extract its translators.
pub fn scan_catalog(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| CreditsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_translators(&content))
}
