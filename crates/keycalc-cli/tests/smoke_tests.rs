//! Smoke tests for the keycalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_left_to_right() {
    keycalc()
        .args(["eval", "2+3*4"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_leading_minus() {
    keycalc()
        .args(["eval", "-5+3"])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "5/0"])
        .assert()
        .failure()
        .stdout("Error\n")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_eval_json() {
    keycalc()
        .args(["--format", "json", "eval", "50%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\":\"0.5\""));
}

// ============================================================================
// press / repl / keypad
// ============================================================================

#[test]
fn test_press_buttons() {
    keycalc()
        .args(["press", "5", "+", "-", "3", "="])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_press_trace_flag_after_buttons() {
    keycalc()
        .args(["press", "7", "-", "2", "=", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("5\n"))
        .stdout(predicate::str::contains("7-2"));
}

#[test]
fn test_press_quiet() {
    keycalc()
        .args(["press", "1", "=", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_press_unknown_button() {
    keycalc()
        .args(["press", "2", "^", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown button: ^"));
}

#[test]
fn test_repl_from_stdin() {
    keycalc()
        .arg("repl")
        .write_stdin("1 2 3\nDEL\n= 4\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("4\n"));
}

#[test]
fn test_keypad_layout() {
    keycalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("AC"))
        .stdout(predicate::str::contains("MOD"));
}
