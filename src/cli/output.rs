//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::models::Config;

/// A command result that can be rendered for humans or machines
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;

    /// JSON rendering
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

impl CommandOutput for Config {
    fn to_human(&self) -> String {
        self.to_string()
    }
}

/// Error payload printed when resolution fails
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    /// Rendered error message
    pub error: String,
}

impl CommandOutput for ErrorOutput {
    fn to_human(&self) -> String {
        format!("Error: {}", self.error)
    }
}
