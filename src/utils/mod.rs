//! Utility functions and helpers
//!
//! Logging setup and the on-disk locations the tools use.

pub mod app_paths;
pub mod logging;
