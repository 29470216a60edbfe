//! Integration tests for the vaultlink CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Anything that needs a live server or an interactive terminal is
//! covered by the store and workflow tests instead, so the focus here
//! is argument parsing, validation order (before any network or prompt
//! activity), and the offline commands.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the vaultlink binary.
fn vaultlink() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vaultlink").expect("binary should exist")
}

#[test]
fn help_flag_shows_usage() {
    vaultlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal client for a self-hosted secrets vault server",
        ))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn version_flag_shows_version() {
    vaultlink()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultlink"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    vaultlink()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_rejects_unknown_type_before_connecting() {
    // The bogus server would hang or error if the command ever got that
    // far; the type filter must be validated first.
    vaultlink()
        .args(["list", "--type", "ssh-key", "--server", "http://127.0.0.1:1"])
        .env("VAULTLINK_PASSWORD", "irrelevant")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown type"));
}

#[test]
fn add_rejects_unknown_type_before_connecting() {
    vaultlink()
        .args([
            "add",
            "My entry",
            "--type",
            "ssh-key",
            "--server",
            "http://127.0.0.1:1",
        ])
        .env("VAULTLINK_PASSWORD", "irrelevant")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown type"));
}

#[test]
fn browse_requires_a_terminal() {
    // Piped stdin means no terminal; browse must refuse before touching
    // the network.
    vaultlink()
        .args(["browse", "--server", "http://127.0.0.1:1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn list_against_unreachable_server_fails_cleanly() {
    vaultlink()
        .args(["list", "--server", "http://127.0.0.1:1"])
        .env("VAULTLINK_PASSWORD", "irrelevant")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{2717}"));
}

#[test]
fn status_reports_server_url() {
    // Status never fails the process for an unreachable server; it
    // reports and exits cleanly.
    vaultlink()
        .args(["status", "--server", "http://127.0.0.1:1"])
        .env("VAULTLINK_PASSWORD", "irrelevant")
        .assert()
        .success()
        .stdout(predicate::str::contains("Server: http://127.0.0.1:1"));
}

#[test]
fn completions_bash_generates_script() {
    vaultlink()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultlink"));
}

#[test]
fn completions_unknown_shell_fails() {
    vaultlink()
        .args(["completions", "csh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

#[cfg(feature = "audit-log")]
#[test]
fn audit_with_fresh_home_reports_no_entries() {
    let tmp = TempDir::new().unwrap();

    vaultlink()
        .arg("audit")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));
}

#[cfg(feature = "audit-log")]
#[test]
fn audit_rejects_invalid_duration() {
    let tmp = TempDir::new().unwrap();

    vaultlink()
        .args(["audit", "--since", "7x"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
