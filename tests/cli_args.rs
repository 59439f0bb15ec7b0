//! Tests for CLI argument parsing and the one-shot subcommands, run
//! against the built binary.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use serde_json::json;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Binary invocation isolated from any user config file.
fn converter_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_currency-converter"));
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("CURRENCY_CONVERTER_LOG");
    cmd
}

async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .expect("command task")
}

#[test]
fn test_help_lists_options_and_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = converter_cmd(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--api-url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("symbols"));
    assert!(stdout.contains("history"));
    assert!(stdout.contains("convert"));
}

#[test]
fn test_invalid_api_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = converter_cmd(&dir)
        .args(["--api-url", "ftp://rates.example.com", "symbols"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"));
}

#[test]
fn test_convert_rejects_invalid_amount_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let output = converter_cmd(&dir)
        .args(["--api-url", "http://127.0.0.1:9", "convert", ".", "USD", "EUR"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter an amount to convert"));
}

#[test]
fn test_convert_requires_three_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = converter_cmd(&dir)
        .args(["convert", "100", "USD"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[tokio::test]
async fn test_symbols_subcommand_prints_codes() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/api/currency/symbols",
            MockResponse::data(json!([{ "USD": "US Dollar" }, { "EUR": "Euro" }])),
        )
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = converter_cmd(&dir);
    cmd.args(["--api-url", &backend.base_url(), "symbols"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USD   US Dollar"));
    assert!(stdout.contains("EUR   Euro"));
}

#[tokio::test]
async fn test_convert_subcommand_prints_result() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/api/currency/convert",
            MockResponse::data(json!({
                "id": "c1",
                "originalAmount": 100.0,
                "from": "USD",
                "to": "EUR",
                "destAmount": 92.3,
                "createdAt": "2024-05-01T12:00:00.000Z"
            })),
        )
        .await;
    backend
        .enqueue("/api/currency/conversions", MockResponse::data(json!([])))
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = converter_cmd(&dir);
    cmd.args(["--api-url", &backend.base_url(), "convert", "100", "USD", "EUR"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("100 USD = 92.3 EUR"));
    assert_eq!(backend.requests_to("/api/currency/convert").await.len(), 1);
    assert_eq!(backend.requests_to("/api/currency/conversions").await.len(), 1);
}
