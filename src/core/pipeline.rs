//! The credits pipeline.
//!
//! Runs in a fixed order, all funnelling into one [`ContributorRegistry`]:
//!
//! 1. Seed names from the configuration
//! 2. Commit authors of every configured repository
//! 3. Translators of every catalog matched by each configured pattern
//! 4. Case-insensitive sort and write

use std::path::PathBuf;

use anyhow::Result;

use super::{
    catalog::{find_catalogs, scan_catalog},
    history::HistorySource,
    registry::ContributorRegistry,
    writer::write_credits,
};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Seed,
    Repository,
    Catalogs,
}

/// Counts for one input of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCount {
    pub kind: SourceKind,
    /// Repository directory or catalog pattern, as configured.
    pub label: String,
    /// Files scanned; always 0 for seeds and repositories.
    pub files: usize,
    /// Names the source produced, including duplicates and exclusions.
    pub found: usize,
    /// Names that were new to the registry.
    pub accepted: usize,
}

/// A name that entered the registry, and where it first came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credit {
    pub name: String,
    pub source: String,
}

#[derive(Debug)]
pub struct CreditsSummary {
    pub sources: Vec<SourceCount>,
    /// Accepted names in discovery order.
    pub credits: Vec<Credit>,
    /// Final case-insensitively sorted names.
    pub names: Vec<String>,
    /// Where the names were written; `None` for dry runs.
    pub output: Option<PathBuf>,
}

pub struct Pipeline<H> {
    root: PathBuf,
    config: Config,
    history: H,
}

impl<H: HistorySource> Pipeline<H> {
    pub fn new(root: impl Into<PathBuf>, config: Config, history: H) -> Self {
        Self {
            root: root.into(),
            config,
            history,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path(&self.root)
    }

    /// Collect, merge and sort every source. Writes the credits file unless
    /// `dry_run` is set.
    pub fn run(&self, dry_run: bool) -> Result<CreditsSummary> {
        let mut registry = ContributorRegistry::new(self.config.exclusions.iter().cloned());
        let mut sources = Vec::new();
        let mut credits = Vec::new();

        let mut tally = SourceCount {
            kind: SourceKind::Seed,
            label: "seed".to_string(),
            files: 0,
            found: 0,
            accepted: 0,
        };
        for name in &self.config.seed_names {
            tally.found += 1;
            if registry.seed(name) {
                tally.accepted += 1;
                credits.push(Credit {
                    name: name.clone(),
                    source: tally.label.clone(),
                });
            }
        }
        sources.push(tally);

        for repository in &self.config.repositories {
            let authors = self.history.authors(&self.root.join(repository))?;
            let mut tally = SourceCount {
                kind: SourceKind::Repository,
                label: repository.clone(),
                files: 0,
                found: authors.len(),
                accepted: 0,
            };
            accept_all(&mut registry, &authors, &mut tally, &mut credits);
            sources.push(tally);
        }

        for pattern in &self.config.catalog_patterns {
            let mut tally = SourceCount {
                kind: SourceKind::Catalogs,
                label: pattern.clone(),
                files: 0,
                found: 0,
                accepted: 0,
            };
            for path in find_catalogs(&self.root, pattern)? {
                let translators = scan_catalog(&path)?;
                tally.files += 1;
                tally.found += translators.len();
                accept_all(&mut registry, &translators, &mut tally, &mut credits);
            }
            sources.push(tally);
        }

        let names = registry.into_sorted();
        let output = if dry_run {
            None
        } else {
            let path = self.output_path();
            write_credits(&path, &names)?;
            Some(path)
        };

        Ok(CreditsSummary {
            sources,
            credits,
            names,
            output,
        })
    }
}

fn accept_all(
    registry: &mut ContributorRegistry,
    candidates: &[String],
    tally: &mut SourceCount,
    credits: &mut Vec<Credit>,
) {
    for name in candidates {
        if registry.accept(name) {
            tally.accepted += 1;
            credits.push(Credit {
                name: name.clone(),
                source: tally.label.clone(),
            });
        }
    }
}
