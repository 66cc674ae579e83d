//! CLI integration tests
//!
//! Runs the built binary. Backend-dependent cases point it at a local port with
//! nothing listening, so they exercise the failure path only.

use std::net::TcpListener;
use std::process::{Command, Output};
use tempfile::TempDir;

fn gradebox() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gradebox"));
    for key in [
        "GRADEBOX_MODEL",
        "GRADEBOX_API_BASE_URL",
        "GRADEBOX_REQUEST_TIMEOUT",
        "GRADEBOX_LOG_LEVEL",
        "GRADEBOX_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Endpoint on a port nobody listens on
fn dead_endpoint() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}/v1/", port)
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute gradebox")
}

#[test]
fn test_cli_help() {
    let output = run(gradebox().arg("--help"));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gradebox"));
    assert!(stdout.contains("--question-file"));
    assert!(stdout.contains("--answer-file"));
    assert!(stdout.contains("--model"));
}

#[test]
fn test_cli_version() {
    let output = run(gradebox().arg("--version"));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_format_is_usage_error() {
    let output = run(gradebox().args(["--format", "xml"]));

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unreachable_backend_exits_nonzero() {
    let output = run(gradebox()
        .env("GRADEBOX_API_BASE_URL", dead_endpoint())
        .env("GRADEBOX_REQUEST_TIMEOUT", "10"));

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with(" Evaluating React Answer...\n"));
    assert!(!stdout.contains("Final Evaluation"));
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("llama3.2"));
}

#[test]
fn test_model_flag_reaches_error_message() {
    let output = run(gradebox()
        .args(["--model", "qwen2.5-coder:7b", "--format", "json"])
        .env("GRADEBOX_API_BASE_URL", dead_endpoint()));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("qwen2.5-coder:7b"));
}

#[test]
fn test_missing_answer_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.jsx");

    let output = run(gradebox()
        .arg("--answer-file")
        .arg(&missing)
        .env("GRADEBOX_API_BASE_URL", dead_endpoint()));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read answer file"));
}

#[test]
fn test_bad_timeout_environment() {
    let output = run(gradebox().env("GRADEBOX_REQUEST_TIMEOUT", "forever"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GRADEBOX_REQUEST_TIMEOUT"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_log_level_flag() {
    let output = run(gradebox().args(["--log-level", "loud"]));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level"));
}
