//! Configuration management infrastructure
//!
//! Flat, read-once resolution of the startup configuration:
//! - Process environment lookup
//! - Documented defaults for unset or empty variables
//! - Integer coercion with descriptive errors

pub mod env;
pub mod loader;

pub use env::ProcessEnv;
pub use loader::{
    ConfigError, ConfigLoader, DATABASE_PATH_KEY, ENVIRONMENT_KEY, SERVER_PORT_KEY,
    WORKER_COUNT_KEY,
};
