//! Infrastructure layer module
//!
//! - Configuration resolution from the process environment
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
