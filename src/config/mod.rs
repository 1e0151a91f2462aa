//! Configuration module
//!
//! Settings read from `utils.toml`; currently only logging is configurable.

pub mod config;

pub use config::{ColorChoice, Config, LoggingConfig};
