use std::{fs, path::Path};

use anyhow::Result;

use crate::error::CreditsError;

/// Render names one per line, without a trailing newline.
pub fn render_credits(names: &[String]) -> String {
    names.join("\n")
}

/// Write the credits file, replacing any existing content.
///
/// Parent directories are not created.
pub fn write_credits(path: &Path, names: &[String]) -> Result<()> {
    fs::write(path, render_credits(names)).map_err(|source| CreditsError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
