//! CLI integration tests for the taskqueue-config binary.
//! Checks exit codes and which stream carries the record, errors and logs.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const KEYS: [&str; 4] = ["DATABASE_PATH", "SERVER_PORT", "WORKER_COUNT", "ENVIRONMENT"];

/// Build a command for the binary with none of the recognised variables set
fn clean_cmd() -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("taskqueue-config");
    for key in KEYS {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_invalid_worker_count_fails_with_json_error() {
    clean_cmd()
        .env("WORKER_COUNT", "abc")
        .arg("--json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            r#"{"error":"invalid WORKER_COUNT: abc"}"#,
        ));
}

#[test]
fn test_invalid_worker_count_fails_with_human_error() {
    clean_cmd()
        .env("WORKER_COUNT", "3.5")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid WORKER_COUNT: 3.5"));
}

#[test]
fn test_server_port_override_printed_to_stdout() {
    clean_cmd()
        .env("SERVER_PORT", "9090")
        .args(["--log-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server_port:   9090"))
        .stdout(predicate::str::contains("worker_count:  3"))
        .stdout(predicate::str::contains("configuration resolved").not())
        .stderr(predicate::str::contains("configuration resolved"));
}

#[test]
fn test_json_output_with_clean_environment() {
    let output = clean_cmd()
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).expect("stdout should be a JSON document");
    assert_eq!(
        json,
        serde_json::json!({
            "database_path": "./data/taskqueue.db",
            "server_port": "8080",
            "worker_count": 3,
            "environment": "development",
        })
    );
}

#[test]
fn test_empty_worker_count_uses_default() {
    clean_cmd()
        .env("WORKER_COUNT", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("worker_count:  3"));
}
