//! sshaudit Common - Shared utilities: logging and tool settings
//!
//! This crate provides common functionality used by the sshaudit binary.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigBuilder};
pub use logging::{init_logging_with_config, LogConfig};
