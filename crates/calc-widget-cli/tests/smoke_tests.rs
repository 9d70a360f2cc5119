//! Smoke tests for the calcw CLI

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the calcw binary
fn calcw() -> Command {
    let mut cmd = Command::cargo_bin("calcw").expect("calcw binary should exist");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    calcw()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    calcw()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("prompt"));
}

#[test]
fn test_no_args_fails() {
    calcw().assert().failure();
}

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_prints_display_and_status() {
    calcw()
        .args(["press", "12+30="])
        .assert()
        .success()
        .stdout("42\n12 + 30 = 42\n");
}

#[test]
fn test_press_chained_operators() {
    calcw()
        .args(["press", "2+3*4="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("20\n"))
        .stdout(predicate::str::contains("5 * 4 = 20"));
}

#[test]
fn test_press_quiet_hides_status() {
    calcw()
        .args(["-q", "press", "0.1+0.2="])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn test_press_division_by_zero_shows_error() {
    calcw()
        .args(["press", "5/0="])
        .assert()
        .success()
        .stdout("0\nError: Division by zero\n");
}

#[test]
fn test_press_wait_clears_error() {
    calcw()
        .args(["press", "5/0=", "--wait-ms", "3000"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_press_error_clear_ms_flag() {
    calcw()
        .args(["--error-clear-ms", "10", "press", "5/0=", "--wait-ms", "10"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_press_json() {
    let output = calcw()
        .args(["press", "7*6=", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["display"], "42");
    assert_eq!(value["status"]["text"], "7 * 6 = 42");
    assert_eq!(value["status"]["style"], "Success");
}

#[test]
fn test_press_letter_x_is_not_an_operator() {
    calcw()
        .args(["press", "1x2="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_press_tiny_result_uses_exponent() {
    calcw()
        .args(["press", "1/10000000="])
        .assert()
        .success()
        .stdout("1e-7\n1 / 10000000 = 1e-7\n");
}

#[test]
fn test_press_bad_sequence_fails() {
    calcw()
        .args(["press", "1+y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ============================================================================
// Eval
// ============================================================================

#[test]
fn test_eval_success() {
    calcw()
        .args(["eval", "10", "/", "4"])
        .assert()
        .success()
        .stdout("Result: 10 / 4 = 2.5\n");
}

#[test]
fn test_eval_negative_numbers() {
    calcw()
        .args(["eval", "-2", "-", "-3"])
        .assert()
        .success()
        .stdout("Result: -2 - -3 = 1\n");
}

#[test]
fn test_eval_division_by_zero() {
    calcw()
        .args(["eval", "10", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Division by zero"));
}

#[test]
fn test_eval_error_is_printed_once_plain() {
    calcw()
        .args(["eval", "10", "/", "0"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Error: Division by zero\n");
}

#[test]
fn test_eval_error_colored_when_forced() {
    Command::cargo_bin("calcw")
        .expect("calcw binary should exist")
        .env_remove("RUST_LOG")
        .args(["--color", "always", "eval", "10", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{1b}["))
        .stderr(predicate::str::contains("Error: Division by zero"));
}

#[test]
fn test_eval_invalid_operation() {
    calcw()
        .args(["eval", "1", "%", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid operation"));
}

#[test]
fn test_eval_invalid_number() {
    calcw()
        .args(["eval", "one", "+", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Please enter valid numbers"));
}

// ============================================================================
// Prompt and config
// ============================================================================

#[test]
fn test_prompt_reads_stdin() {
    calcw()
        .arg("prompt")
        .write_stdin("9\n-\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Simple Calculator ==="))
        .stdout(predicate::str::contains("Enter first number: "))
        .stdout(predicate::str::contains("Result: 9 - 4 = 5"));
}

#[test]
fn test_prompt_invalid_input() {
    calcw()
        .arg("prompt")
        .write_stdin("nine\n-\n4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Please enter valid numbers"));
}

#[test]
fn test_config_yaml() {
    calcw()
        .args(["--error-clear-ms", "1234", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("error_clear_delay_ms: 1234"));
}

#[test]
fn test_config_json() {
    calcw()
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error_clear_delay_ms\": 3000"));
}
