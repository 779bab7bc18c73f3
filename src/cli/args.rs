//! CLI argument definitions using clap.
//!
//! `credits [ROOT]` collects contributors of the project at ROOT and writes
//! them to the configured credits file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root holding the git repository, `view/` and `addon/` (default: current directory)
    pub root: Option<PathBuf>,

    /// Credits file to write (overrides config file; relative paths are resolved against ROOT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version-control executable used for `shortlog`
    #[arg(long, default_value = "git")]
    pub git: PathBuf,

    /// Collect and print the names without writing the credits file
    #[arg(long)]
    pub dry_run: bool,

    /// List every accepted name and where it was found
    #[arg(short, long)]
    pub verbose: bool,
}
