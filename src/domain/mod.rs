//! Domain layer for the task queue startup configuration
//!
//! This module contains the configuration record and the port through which
//! the resolver reads its inputs.

pub mod models;
pub mod ports;

pub use models::Config;
pub use ports::EnvSource;
