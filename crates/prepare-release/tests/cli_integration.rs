//! End-to-end CLI integration tests.
//!
//! Each test lays out a miniature selene checkout in a temporary
//! directory, runs the binary there and inspects the rewritten files.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHANGELOG: &str = "# selene Changelog\n\
    \n\
    ## [Unreleased](https://github.com/Kampfkarren/selene/compare/0.9.0...HEAD)\n\
    ### Added\n\
    - Added a new lint\n\
    \n\
    ## [0.9.0](https://github.com/Kampfkarren/selene/releases/tag/0.9.0) - 2023-12-01\n";

const ROOT_MANIFEST: &str = r#"[package]
name = "selene-lib"
version = "0.9.0"
rust-version = "1.70"
edition = "2021"
"#;

const DEPENDENT_MANIFEST: &str = r#"[package]
name = "selene"
version = "0.9.0"

[dependencies]
color-eyre = "0.6"
selene-lib = { path = "../selene-lib", version = "=0.9.0", default-features = false }
"#;

/// Build check that always succeeds and is available wherever tests run.
const PASSING_CHECK: &str = "[check]\ncommand = [\"cargo\", \"--version\"]\n";

/// Creates a project layout with a passing build check.
fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    fs::write(dir.join("CHANGELOG.md"), CHANGELOG).expect("failed to write CHANGELOG.md");
    fs::write(dir.join("Cargo.toml"), ROOT_MANIFEST).expect("failed to write Cargo.toml");
    fs::create_dir(dir.join("selene")).expect("failed to create selene dir");
    fs::write(dir.join("selene/Cargo.toml"), DEPENDENT_MANIFEST)
        .expect("failed to write selene/Cargo.toml");
    fs::write(dir.join("prepare-release.toml"), PASSING_CHECK).expect("failed to write config");

    temp_dir
}

fn prepare_release(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prepare-release").expect("binary should be built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("failed to read file")
}

/// Snapshot of the three release documents.
fn documents(dir: &Path) -> [String; 3] {
    [
        read(dir, "CHANGELOG.md"),
        read(dir, "Cargo.toml"),
        read(dir, "selene/Cargo.toml"),
    ]
}

fn original_documents() -> [String; 3] {
    [
        CHANGELOG.to_string(),
        ROOT_MANIFEST.to_string(),
        DEPENDENT_MANIFEST.to_string(),
    ]
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: prepare-release <version>"));

    assert_eq!(documents(dir), original_documents());
}

#[test]
fn test_two_arguments_prints_usage() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir)
        .args(["1.0.0", "2.0.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: prepare-release <version>"));

    assert_eq!(documents(dir), original_documents());
}

#[test]
fn test_help() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    prepare_release(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_release_updates_all_files() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir)
        .arg("v1.2.3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating CHANGELOG..."))
        .stdout(predicate::str::contains("Updating root Cargo.toml..."))
        .stdout(predicate::str::contains("Updating selene/Cargo.toml..."))
        .stdout(predicate::str::contains("Running cargo --version..."))
        .stdout(predicate::str::contains(
            "Done. Next steps:\n- Make and push a commit with [release]\n- cargo publish\n",
        ));

    let changelog = read(dir, "CHANGELOG.md");
    assert!(changelog.contains(
        "## [Unreleased](https://github.com/Kampfkarren/selene/compare/v1.2.3...HEAD)\n\n## [v1.2.3]"
    ));
    let release_heading = predicate::str::is_match(
        r"(?m)^## \[v1\.2\.3\]\(https://github\.com/Kampfkarren/selene/releases/tag/v1\.2\.3\) - \d{4}-\d{2}-\d{2}$",
    )
    .expect("valid regex");
    assert!(release_heading.eval(&changelog));
    assert!(changelog.contains("## [0.9.0](https://github.com/Kampfkarren/selene/releases/tag/0.9.0) - 2023-12-01"));

    assert_eq!(
        read(dir, "Cargo.toml"),
        ROOT_MANIFEST.replacen(r#"version = "0.9.0""#, r#"version = "v1.2.3""#, 1)
    );
    assert_eq!(
        read(dir, "selene/Cargo.toml"),
        DEPENDENT_MANIFEST.replace(r#"version = "=0.9.0""#, r#"version = "=v1.2.3""#)
    );
}

#[test]
fn test_dependent_manifest_keeps_own_version() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir).arg("2.0.0").assert().success();

    let dependent = read(dir, "selene/Cargo.toml");
    assert!(dependent.contains("name = \"selene\"\nversion = \"0.9.0\"\n"));
    assert!(dependent.contains(
        r#"selene-lib = { path = "../selene-lib", version = "=2.0.0", default-features = false }"#
    ));
}

#[test]
fn test_second_run_is_noop() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir).arg("2.0.0").assert().success();
    let after_first = documents(dir);

    prepare_release(dir)
        .arg("2.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("already refers to 2.0.0"));

    assert_eq!(documents(dir), after_first);
    assert_eq!(after_first[0].matches("## [2.0.0]").count(), 1);
}

#[test]
fn test_missing_file_fails_without_changes() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();
    fs::remove_file(dir.join("selene/Cargo.toml")).expect("failed to remove file");

    prepare_release(dir)
        .arg("2.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("selene/Cargo.toml"));

    assert_eq!(read(dir, "CHANGELOG.md"), CHANGELOG);
    assert_eq!(read(dir, "Cargo.toml"), ROOT_MANIFEST);
}

#[test]
fn test_pattern_miss_warns_and_continues() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();
    fs::write(dir.join("CHANGELOG.md"), "# selene Changelog\n").expect("failed to write");

    prepare_release(dir)
        .arg("2.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: no `## [Unreleased](...)` heading found in CHANGELOG.md",
        ))
        .stdout(predicate::str::contains("Done. Next steps:"));

    assert_eq!(read(dir, "CHANGELOG.md"), "# selene Changelog\n");
    assert!(read(dir, "Cargo.toml").contains(r#"version = "2.0.0""#));
}

#[test]
fn test_failing_check_does_not_fail_release() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();
    fs::write(
        dir.join("prepare-release.toml"),
        "[check]\ncommand = [\"cargo\", \"definitely-not-a-cargo-subcommand\"]\n",
    )
    .expect("failed to write config");

    prepare_release(dir)
        .arg("2.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: `cargo definitely-not-a-cargo-subcommand` exited with status",
        ))
        .stdout(predicate::str::contains("Done. Next steps:"));

    assert!(read(dir, "Cargo.toml").contains(r#"version = "2.0.0""#));
}

#[test]
fn test_dry_run_changes_nothing() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();

    prepare_release(dir)
        .args(["--dry-run", "2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update CHANGELOG.md"))
        .stdout(predicate::str::contains("Would update selene/Cargo.toml"))
        .stdout(predicate::str::contains("Dry run completed"))
        .stdout(predicate::str::contains("Running").not());

    assert_eq!(documents(dir), original_documents());
}

#[test]
fn test_defaults_without_config_file() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();
    fs::remove_file(dir.join("prepare-release.toml")).expect("failed to remove config");

    prepare_release(dir)
        .args(["--no-check", "2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping build check"));

    assert!(read(dir, "CHANGELOG.md").contains("compare/2.0.0...HEAD"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_project();
    let dir = temp_dir.path();
    fs::write(dir.join("prepare-release.toml"), "[check]\ncommand = []\n")
        .expect("failed to write config");

    prepare_release(dir)
        .arg("2.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));

    assert_eq!(documents(dir), original_documents());
}
