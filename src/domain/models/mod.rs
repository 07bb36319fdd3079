//! Domain models

pub mod config;

pub use config::{
    Config, DEFAULT_DATABASE_PATH, DEFAULT_ENVIRONMENT, DEFAULT_SERVER_PORT, DEFAULT_WORKER_COUNT,
};
