//! Binary-level tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fmghist() -> Command {
    Command::cargo_bin("fmghist").unwrap()
}

/// A command with an isolated home and no FMG_* environment leakage.
fn isolated(home: &TempDir) -> Command {
    let mut cmd = fmghist();
    cmd.env("HOME", home.path())
        .env_remove("FMG_IP")
        .env_remove("FMG_USER")
        .env_remove("FMG_PASS")
        .env_remove("FMG_ADOM")
        .env_remove("FMG_PLATFORM")
        .env_remove("FMG_SCRIPT");
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    fmghist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_the_package_version() {
    fmghist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_emit_a_script() {
    fmghist()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fmghist"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();

    isolated(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[controller]"))
        .stdout(predicate::str::contains("timeout_secs = 30"));
}

#[test]
fn run_without_inputs_fails_on_the_first_prompt() {
    let home = TempDir::new().unwrap();

    // Empty stdin: the host prompt reads EOF and the run aborts
    isolated(&home)
        .arg("run")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    fmghist().arg("frobnicate").assert().failure();
}
