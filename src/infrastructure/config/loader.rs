use std::num::ParseIntError;
use thiserror::Error;

use super::env::ProcessEnv;
use crate::domain::models::config::{
    Config, DEFAULT_DATABASE_PATH, DEFAULT_ENVIRONMENT, DEFAULT_SERVER_PORT, DEFAULT_WORKER_COUNT,
};
use crate::domain::ports::EnvSource;

/// Environment variable holding the storage path
pub const DATABASE_PATH_KEY: &str = "DATABASE_PATH";

/// Environment variable holding the server port
pub const SERVER_PORT_KEY: &str = "SERVER_PORT";

/// Environment variable holding the deployment environment label
pub const ENVIRONMENT_KEY: &str = "ENVIRONMENT";

/// Environment variable holding the worker count
pub const WORKER_COUNT_KEY: &str = "WORKER_COUNT";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable was set to text that cannot be coerced to its declared type
    #[error("invalid {key}: {value}")]
    InvalidConfigValue {
        /// Environment variable that failed
        key: &'static str,
        /// Literal text that was supplied
        value: String,
        /// Underlying parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Resolves the startup [`Config`] from environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve configuration from the process environment
    ///
    /// See [`ProcessEnv`] for how concurrent environment mutation is handled.
    pub fn load() -> Result<Config, ConfigError> {
        Self::resolve(&ProcessEnv)
    }

    /// Resolve configuration from an arbitrary key/value source
    ///
    /// Each variable that is unset or set to the empty string takes its
    /// documented default. Both cases are deliberately treated the same; there
    /// is no way to express "explicitly empty". A `WORKER_COUNT` that is
    /// present but not a base-10 integer is an error, never a silent fallback.
    pub fn resolve(env: &impl EnvSource) -> Result<Config, ConfigError> {
        let database_path = text_or(env, DATABASE_PATH_KEY, DEFAULT_DATABASE_PATH);
        let server_port = text_or(env, SERVER_PORT_KEY, DEFAULT_SERVER_PORT);
        let environment = text_or(env, ENVIRONMENT_KEY, DEFAULT_ENVIRONMENT);

        let worker_count = match lookup(env, WORKER_COUNT_KEY) {
            Some(raw) => parse_int(WORKER_COUNT_KEY, raw)?,
            None => DEFAULT_WORKER_COUNT,
        };

        Ok(Config::new(
            database_path,
            server_port,
            worker_count,
            environment,
        ))
    }
}

/// Empty values count as unset
fn lookup(env: &impl EnvSource, key: &str) -> Option<String> {
    env.get(key).filter(|value| !value.is_empty())
}

fn text_or(env: &impl EnvSource, key: &str, default: &str) -> String {
    lookup(env, key).unwrap_or_else(|| default.to_string())
}

fn parse_int(key: &'static str, raw: String) -> Result<i64, ConfigError> {
    raw.parse::<i64>()
        .map_err(|source| ConfigError::InvalidConfigValue {
            key,
            value: raw,
            source,
        })
}
