use chrono::Local;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Result, UtilsError};
use crate::log_format::AcbsEventFormat;
use crate::palette::Palette;
use crate::utils::app_paths::AppPaths;

/// Environment variable holding a filter directive that beats the config
pub const LOG_ENV: &str = "ACBS_LOG";

/// Maximum number of lines a capture keeps
const MAX_CAPTURED_LINES: usize = 1000;

#[derive(Default)]
struct CaptureState {
    lines: VecDeque<String>,
    /// Text written since the last newline
    pending: String,
}

impl CaptureState {
    fn push(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        if self.lines.len() >= MAX_CAPTURED_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line.to_string());
    }
}

/// In-memory sink keeping the most recent formatted log lines.
///
/// A line is only stored once its newline arrives (or on `flush`), so
/// writes that split a line across several calls are reassembled.
#[derive(Clone, Default)]
pub struct LogCapture {
    state: Arc<Mutex<CaptureState>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, CaptureState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn lines(&self) -> Vec<String> {
        self.state().lines.iter().cloned().collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    pub fn clear(&self) {
        let mut state = self.state();
        state.lines.clear();
        state.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.state().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut state = self.state();
        state.pending.push_str(&String::from_utf8_lossy(buf));

        while let Some(newline) = state.pending.find('\n') {
            let line: String = state.pending.drain(..=newline).collect();
            state.push(&line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut state = self.state();
        let rest = std::mem::take(&mut state.pending);
        state.push(&rest);
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// A subscriber that renders every event into `capture`
pub fn capture_subscriber(
    capture: &LogCapture,
    palette: Palette,
) -> impl Subscriber + Send + Sync + 'static {
    let layer = fmt::layer()
        .event_format(AcbsEventFormat::new(palette, false, false))
        .with_writer(capture.clone());

    tracing_subscriber::registry()
        .with(LevelFilter::TRACE)
        .with(layer)
}

/// Open a timestamped log file in `log_dir`, pointing `latest.log` at it
pub fn open_log_file(log_dir: &Path) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("acbs-utils_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    #[cfg(unix)]
    {
        let latest_path = log_dir.join("latest.log");
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }

    Ok((file, log_path))
}

/// Install the global subscriber: colored tags on stderr, plus an
/// uncolored file copy when enabled. Returns the log file path, if any.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let colored = config.color.enabled(std::io::stderr().is_terminal());
    let stderr_layer = fmt::layer()
        .event_format(AcbsEventFormat::new(
            Palette::select(colored),
            config.show_time,
            config.show_target,
        ))
        .with_writer(std::io::stderr);

    let (file_layer, log_path) = if config.log_to_file {
        let log_dir = match &config.log_dir {
            Some(dir) => dir.clone(),
            None => AppPaths::log_dir()?,
        };
        let (file, path) = open_log_file(&log_dir)?;
        let layer = fmt::layer()
            .event_format(AcbsEventFormat::new(Palette::plain(), true, true))
            .with_writer(Mutex::new(file));
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| UtilsError::LoggingInit(e.to_string()))?;

    tracing::debug!("Logging initialized");
    Ok(log_path)
}

/// Report that the build is being terminated.
///
/// Prints two newlines to stdout to separate the report from any progress
/// output, then logs the error with `desc` highlighted.
pub fn build_terminated(desc: Option<&str>, palette: &Palette) {
    build_terminated_to(&mut std::io::stdout(), desc, palette);
}

/// [`build_terminated`] with the separator written to `out`
pub fn build_terminated_to<W: std::io::Write>(
    out: &mut W,
    desc: Option<&str>,
    palette: &Palette,
) {
    let _ = out.write_all(b"\n\n");
    let _ = out.flush();
    match desc {
        None => tracing::error!("Error occurred! Build terminated."),
        Some(desc) => tracing::error!(
            "Error occurred:{} {} {}Build terminated.",
            palette.yellow,
            desc,
            palette.rst
        ),
    }
}

/// Log at critical severity
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        tracing::error!(target: $crate::log_format::CRITICAL_TARGET, $($arg)*)
    };
}
