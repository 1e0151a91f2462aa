use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the helper library
#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("Value of logic mode is illegal: {0}")]
    InvalidLogic(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Could not determine {0} directory")]
    NoDirectory(&'static str),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

pub type Result<T> = std::result::Result<T, UtilsError>;
