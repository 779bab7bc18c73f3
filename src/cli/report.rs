//! Progress and summary output.
//!
//! Everything goes to stdout as plain informational lines; errors are
//! printed by the binary itself.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{CreditsSummary, SourceCount, SourceKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Stage prefix for progress lines.
const STAGE_MARK: &str = ">";

pub fn print_root(root: &Path) {
    print_root_to(root, &mut io::stdout().lock());
}

pub fn print_root_to<W: Write>(root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} base directory: {}",
        STAGE_MARK.cyan(),
        root.display()
    );
}

/// Print per-source counts followed by the result.
pub fn print(summary: &CreditsSummary, verbose: bool) {
    print_to(summary, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(summary: &CreditsSummary, verbose: bool, writer: &mut W) {
    for source in &summary.sources {
        print_source(source, writer);
    }

    if verbose {
        for credit in &summary.credits {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                "+".green(),
                credit.name,
                format!("({})", credit.source).dimmed()
            );
        }
    }

    let count = summary.names.len();
    let noun = plural(count);
    match &summary.output {
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Wrote {} {} to {}", count, noun, path.display()).green()
            );
        }
        None => {
            for name in &summary.names {
                let _ = writeln!(writer, "{}", name);
            }
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Collected {} {} (dry run, nothing written)", count, noun).green()
            );
        }
    }
}

fn print_source<W: Write>(source: &SourceCount, writer: &mut W) {
    let line = match source.kind {
        SourceKind::Seed => format!("{} seed {}", source.accepted, plural(source.accepted)),
        SourceKind::Repository => format!(
            "repository {}: {} {}, {} new",
            source.label.bold(),
            source.found,
            if source.found == 1 {
                "contributor"
            } else {
                "contributors"
            },
            source.accepted
        ),
        SourceKind::Catalogs => format!(
            "catalogs {}: {} {}, {} {}, {} new",
            source.label.bold(),
            source.files,
            if source.files == 1 { "file" } else { "files" },
            source.found,
            if source.found == 1 {
                "translator"
            } else {
                "translators"
            },
            source.accepted
        ),
    };
    let _ = writeln!(writer, "{} {}", STAGE_MARK.cyan(), line);
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "name" } else { "names" }
}
