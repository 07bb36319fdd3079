//! taskqueue-config - startup configuration for the task queue service
//!
//! Resolves a flat, immutable [`Config`] from the process environment once at
//! startup. Unset or empty variables take documented defaults; a malformed
//! `WORKER_COUNT` is reported as [`ConfigError::InvalidConfigValue`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record and the `EnvSource` port
//! - **Infrastructure Layer** (`infrastructure`): the resolver and logging setup
//! - **CLI Layer** (`cli`): a host binary that runs the startup sequence
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use taskqueue_config::ConfigLoader;
//!
//! let env = HashMap::from([("WORKER_COUNT".to_string(), "8".to_string())]);
//! let config = ConfigLoader::resolve(&env)?;
//!
//! assert_eq!(config.worker_count(), 8);
//! assert_eq!(config.server_port(), "8080");
//! # Ok::<(), taskqueue_config::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::Config;
pub use domain::ports::EnvSource;
pub use infrastructure::config::{ConfigError, ConfigLoader, ProcessEnv};
