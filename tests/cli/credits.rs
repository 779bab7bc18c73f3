use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const GERMAN_CATALOG: &str = r#"# FRIENDICA Distributed Social Network
# Copyright (C) 2010-2020 the Friendica Project
# This file is distributed under the same license as the Friendica package.
#
# Translators:
# Carol Carlson <carol@example.com>, 2020
# Dave Davidson, 2019
# Eve Example <eve@example.com>
# Bob Nobody, 2011

msgid ""
msgstr ""
"#;

/// A project with history in both repositories and catalogs in both trees.
fn populated_project() -> Result<CliTest> {
    let test = CliTest::with_repositories()?;
    test.write_file(".creditsrc.json", r#"{ "exclusions": ["Bob Nobody"] }"#)?;

    test.commit(".", "Alice Example")?;
    test.commit(".", "Alice Example")?;
    test.commit(".", "Bob Nobody")?;
    test.commit("addon", "Eve Example")?;
    test.commit("addon", "Alice Example")?;

    test.write_file("view/de/messages.po", GERMAN_CATALOG)?;
    test.write_file(
        "addon/calendar/lang/fr/messages.po",
        "# Translators:\n# Frank\n# Carol Carlson, 2021\n\nmsgid \"\"\n",
    )?;
    Ok(test)
}

#[test]
fn test_writes_merged_sorted_credits() -> Result<()> {
    let test = populated_project()?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_snapshot!(test.read_file("util/credits.txt")?, @r"
    Alice Example
    Andi Stadler
    Carol Carlson
    Dave Davidson
    Eve Example
    Frank
    ");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repository .: 2 contributors, 1 new"));
    assert!(stdout.contains("repository addon: 2 contributors, 1 new"));
    assert!(stdout.contains("catalogs view/*/messages.po: 1 file, 4 translators, 2 new"));
    assert!(stdout.contains("Wrote 6 names"));

    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = populated_project()?;

    let output = test
        .command()
        .current_dir(std::env::temp_dir())
        .arg(test.root())
        .output()?;
    assert!(output.status.success());
    assert!(test.read_file("util/credits.txt")?.starts_with("Alice Example\n"));

    Ok(())
}

#[test]
fn test_rerun_overwrites_with_same_content() -> Result<()> {
    let test = populated_project()?;
    test.write_file("util/credits.txt", "hand edited\n")?;

    test.command().output()?;
    let first = test.read_file("util/credits.txt")?;
    test.command().output()?;
    let second = test.read_file("util/credits.txt")?;

    assert_eq!(first, second);
    assert!(!first.contains("hand edited"));

    Ok(())
}

#[test]
fn test_dry_run_prints_without_writing() -> Result<()> {
    let test = populated_project()?;

    let output = test.command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\nFrank\n"));
    assert!(stdout.contains("Collected 6 names (dry run, nothing written)"));
    assert!(!test.root().join("util/credits.txt").exists());

    Ok(())
}

#[test]
fn test_verbose_lists_sources() -> Result<()> {
    let test = populated_project()?;

    let output = test.command().args(["--verbose", "--dry-run"]).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("+ Eve Example (addon)"));
    assert!(stdout.contains("+ Frank (addon/*/lang/*/messages.po)"));

    Ok(())
}

#[test]
fn test_output_override() -> Result<()> {
    let test = populated_project()?;

    let output = test.command().args(["--output", "CREDITS"]).output()?;
    assert!(output.status.success());
    assert!(test.read_file("CREDITS")?.contains("Dave Davidson"));
    assert!(!test.root().join("util/credits.txt").exists());

    Ok(())
}

#[test]
fn test_inherited_git_dir_does_not_redirect_shortlog() -> Result<()> {
    let test = populated_project()?;

    let output = test
        .command()
        .env("GIT_DIR", test.root().join(".git"))
        .env("GIT_WORK_TREE", test.root())
        .arg("--dry-run")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repository addon: 2 contributors, 1 new"));
    assert!(stdout.contains("\nEve Example\n"));

    Ok(())
}

#[test]
fn test_missing_addon_repository_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.init_repository(".")?;
    test.commit(".", "Alice Example")?;
    test.write_file("util/.keep", "")?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("shortlog"));
    assert!(!test.root().join("util/credits.txt").exists());

    Ok(())
}

#[test]
fn test_missing_git_program_fails() -> Result<()> {
    let test = populated_project()?;

    let output = test
        .command()
        .args(["--git", "definitely-not-a-vcs-binary"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("definitely-not-a-vcs-binary"));

    Ok(())
}

#[test]
fn test_unwritable_output_fails() -> Result<()> {
    let test = populated_project()?;

    let output = test
        .command()
        .args(["--output", "missing/dir/credits.txt"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write credits file"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_repositories()?;
    test.write_file(".creditsrc.json", r#"{ "catalogPatterns": ["view/[/x.po"] }"#)?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("catalogPatterns"));

    Ok(())
}
