// Integration test for logging to files
// Note: the logger installs a global subscriber, so this file holds a single test

use std::fs;
use taskqueue_config::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use tempfile::TempDir;

#[test]
fn test_logging_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_console: false,
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    tracing::info!(worker_count = 3, "configuration resolved");
    tracing::debug!("filtered out below info");

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("taskqueue.log")).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();

    assert!(lines
        .iter()
        .any(|line| line["fields"]["message"] == "configuration resolved"
            && line["fields"]["worker_count"] == 3));
    assert!(!contents.contains("filtered out below info"));

    // A second global subscriber cannot be installed
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());
}
