use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UtilsError};
use crate::utils::app_paths::AppPaths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "acbs_utils=debug"
    pub level: String,

    /// When to color level tags on stderr
    pub color: ColorChoice,

    /// Also write an uncolored copy of the log to a file
    pub log_to_file: bool,

    /// Directory for log files (defaults to the platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix each line with the local time
    pub show_time: bool,

    /// Prefix each line with the event target
    pub show_target: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the sink is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: ColorChoice::Auto,
            log_to_file: false,
            log_dir: None,
            show_time: false,
            show_target: false,
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults if it's missing
    pub fn load() -> Result<Self> {
        let config_path = AppPaths::config_file()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| UtilsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# ACBS utilities configuration
# Location: ~/.config/acbs/utils.toml (Linux)

[logging]
# Filter directive; the ACBS_LOG environment variable overrides it
# e.g. "debug" or "acbs_utils=trace"
level = "info"

# Color level tags on stderr: "auto", "always" or "never"
color = "auto"

# Keep an uncolored copy of every run in a timestamped log file
log_to_file = false

# Where log files go (leave commented to use the default)
# log_dir = "/var/log/acbs"

# Prefix lines with the local time and the event target
show_time = false
show_target = false
"#
        .to_string()
    }
}
