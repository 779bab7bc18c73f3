use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, report};
use crate::{
    config::load_config,
    core::{CreditsSummary, GitShortlog, Pipeline},
};

/// Resolve the project root, load its configuration and run the pipeline.
///
/// Progress for the root is printed before collection starts so that it is
/// visible even when a later stage fails.
pub fn run(args: &Arguments) -> Result<CreditsSummary> {
    let root = resolve_root(args.root.as_deref())?;

    let mut config = load_config(&root)?;
    if let Some(output) = &args.output {
        config.output = output.to_string_lossy().into_owned();
        config.validate()?;
    }

    report::print_root(&root);

    let pipeline = Pipeline::new(root, config, GitShortlog::new(&args.git));
    pipeline.run(args.dry_run)
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    fs::canonicalize(&root)
        .with_context(|| format!("Project root does not exist: {}", root.display()))
}
