//! Command-line host for the configuration resolver
//!
//! Mirrors a service startup sequence: initialise logging, resolve the
//! configuration once, then hand the record on (here, print it).

pub mod output;
pub mod types;

pub use output::{output, CommandOutput, ErrorOutput};
pub use types::Cli;

use anyhow::Result;
use std::fmt;
use std::process::ExitCode;

use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

/// Run the startup sequence described by `cli`
///
/// A configuration error is reported on stderr and mapped to a failing exit
/// code. Only logger installation failures are returned as `Err`.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let _logger = LoggerImpl::init(&cli.log_config())?;

    match ConfigLoader::load() {
        Ok(config) => {
            tracing::info!(
                database_path = config.database_path(),
                server_port = config.server_port(),
                worker_count = config.worker_count(),
                environment = config.environment(),
                "configuration resolved"
            );
            output(&config, cli.json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "configuration rejected");
            handle_error(&err, cli.json);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print an error to stderr, as JSON when `json_mode` is set
pub fn handle_error(err: &dyn fmt::Display, json_mode: bool) {
    let payload = ErrorOutput {
        error: err.to_string(),
    };
    if json_mode {
        eprintln!("{}", payload.to_json());
    } else {
        eprintln!("{}", payload.to_human());
    }
}

impl Cli {
    /// Logging settings selected on the command line
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            enable_console: true,
            rotation: self.log_rotation,
        }
    }
}
