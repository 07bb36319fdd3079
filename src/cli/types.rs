//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::logging::{LogFormat, RotationPolicy};

/// Resolve and print the task queue startup configuration
///
/// Reads `DATABASE_PATH`, `SERVER_PORT`, `WORKER_COUNT` and `ENVIRONMENT`; unset or
/// empty variables take their defaults.
#[derive(Parser, Debug)]
#[command(name = "taskqueue-config")]
#[command(version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Default log level when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Console log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON logs to rolling files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Rotation policy for log files
    #[arg(long, value_enum, default_value_t = RotationPolicy::Daily)]
    pub log_rotation: RotationPolicy,
}
