use std::fs;
use std::path::PathBuf;

use crate::error::{Result, UtilsError};

const APP_DIR: &str = "acbs";

pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or(UtilsError::NoDirectory("config"))?
            .join(APP_DIR))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("utils.toml"))
    }

    /// Default log directory, created if missing
    pub fn log_dir() -> Result<PathBuf> {
        let log_dir = dirs::data_local_dir()
            .ok_or(UtilsError::NoDirectory("data"))?
            .join(APP_DIR)
            .join("logs");

        fs::create_dir_all(&log_dir)?;
        Ok(log_dir)
    }
}
