//! CLI integration tests for mangen
//!
//! These tests drive the real binary and the `clap_mangen` renderer, for
//! both single-page and directory output.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the mangen binary
fn mangen_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mangen"))
}

// =============================================================================
// Single Page Tests
// =============================================================================

#[test]
fn test_manpage_writes_single_page_to_stdout() {
    mangen_cmd()
        .args(["manpage", "manpage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"))
        .stdout(predicate::str::contains("Generate manual pages"))
        .stdout(predicate::str::contains("Jan 2017"))
        .stdout(predicate::str::contains("writing man pages").not());
}

#[test]
fn test_manpage_single_page_is_deterministic() {
    let first = mangen_cmd().args(["manpage", "manpage"]).output().unwrap();
    let second = mangen_cmd().args(["manpage", "manpage"]).output().unwrap();

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_manpage_without_command_fails() {
    mangen_cmd()
        .arg("manpage")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: no command given"));
}

#[test]
fn test_manpage_with_several_commands_fails() {
    mangen_cmd()
        .args(["manpage", "backup", "restore"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("more than one command given: [backup restore]"));
}

#[test]
fn test_manpage_with_unknown_command_fails() {
    mangen_cmd()
        .args(["manpage", "frobnicate"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("command \"frobnicate\" is not known"));
}

// =============================================================================
// Directory Output Tests
// =============================================================================

#[test]
fn test_manpage_output_dir_writes_all_pages() {
    let dir = TempDir::new().unwrap();

    let output = mangen_cmd()
        .args(["manpage", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![format!("writing man pages to directory {}", dir.path().display())]
    );

    assert!(dir.path().join("mangen.1").is_file());
    assert!(dir.path().join("mangen-manpage.1").is_file());
    assert!(!dir.path().join("mangen-help.1").exists());
}

#[test]
fn test_manpage_output_dir_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("share/man/man1");

    mangen_cmd()
        .args(["manpage", "--output-dir"])
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("mangen.1").is_file());
}

#[test]
fn test_manpage_output_dir_ignores_commands() {
    let dir = TempDir::new().unwrap();

    mangen_cmd()
        .args(["manpage", "frobnicate", "extra", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("mangen-manpage.1").is_file());
}

#[test]
fn test_manpage_output_dir_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for dir in [&first, &second] {
        mangen_cmd()
            .args(["manpage", "--output-dir"])
            .arg(dir.path())
            .assert()
            .success();
    }

    for page in ["mangen.1", "mangen-manpage.1"] {
        let a = fs::read(first.path().join(page)).unwrap();
        let b = fs::read(second.path().join(page)).unwrap();
        assert_eq!(a, b, "{} differs between runs", page);
    }
}

#[test]
fn test_manpage_output_dir_only_comes_from_the_flag() {
    let dir = TempDir::new().unwrap();

    mangen_cmd()
        .env("MANGEN_MANPAGE_OUTPUT_DIR", dir.path())
        .env("OUTPUT_DIR", dir.path())
        .args(["manpage", "manpage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"))
        .stdout(predicate::str::contains("writing man pages").not());

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_manpage_output_dir_that_is_a_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("pages");
    fs::write(&file, "").unwrap();

    mangen_cmd()
        .args(["manpage", "--output-dir"])
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

// =============================================================================
// Verbosity Tests
// =============================================================================

#[test]
fn test_quiet_suppresses_notices() {
    let dir = TempDir::new().unwrap();

    mangen_cmd()
        .args(["--quiet", "manpage", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("mangen.1").is_file());
}

#[test]
fn test_verbose_logs_to_stderr() {
    mangen_cmd()
        .args(["--verbose", "manpage", "manpage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[verbose").not())
        .stderr(predicate::str::contains("[verbose:manpage] Looking up command: manpage"));
}
