//! The resolved startup configuration record.

use serde::Serialize;
use std::fmt;

/// Storage path used when `DATABASE_PATH` is unset or empty
pub const DEFAULT_DATABASE_PATH: &str = "./data/taskqueue.db";

/// Listening port used when `SERVER_PORT` is unset or empty
pub const DEFAULT_SERVER_PORT: &str = "8080";

/// Environment label used when `ENVIRONMENT` is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Worker count used when `WORKER_COUNT` is unset or empty
pub const DEFAULT_WORKER_COUNT: i64 = 3;

/// Startup configuration for the task queue service
///
/// Every field always holds a value: either the override read from the
/// environment or the documented default. The record has no setters, so once
/// resolved it cannot change for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    database_path: String,
    server_port: String,
    worker_count: i64,
    environment: String,
}

impl Config {
    /// Build a record from already-resolved values
    pub fn new(
        database_path: impl Into<String>,
        server_port: impl Into<String>,
        worker_count: i64,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            database_path: database_path.into(),
            server_port: server_port.into(),
            worker_count,
            environment: environment.into(),
        }
    }

    /// Filesystem location of the persisted queue data
    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    /// Port the server binds to, passed through unparsed
    pub fn server_port(&self) -> &str {
        &self.server_port
    }

    /// Number of workers to start
    ///
    /// Not range checked: zero and negative values are returned as supplied.
    pub const fn worker_count(&self) -> i64 {
        self.worker_count
    }

    /// Deployment environment label, e.g. `development` or `production`
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATABASE_PATH,
            DEFAULT_SERVER_PORT,
            DEFAULT_WORKER_COUNT,
            DEFAULT_ENVIRONMENT,
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "database_path: {}", self.database_path)?;
        writeln!(f, "server_port:   {}", self.server_port)?;
        writeln!(f, "worker_count:  {}", self.worker_count)?;
        write!(f, "environment:   {}", self.environment)
    }
}
