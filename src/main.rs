//! taskqueue-config CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use taskqueue_config::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            cli::handle_error(&format!("{err:#}"), cli.json);
            ExitCode::FAILURE
        }
    }
}
