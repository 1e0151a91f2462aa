//! ABBS-style log line formatting.
//!
//! Records get a bracketed, colored level tag (`[INFO]`, `[WARN]`, ...)
//! in front of their message before a base formatter renders them.
//! [`AcbsEventFormat`] plugs the same formatting into `tracing-subscriber`.

use std::fmt;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::palette::Palette;

/// Events logged at ERROR on this target are rendered as critical
pub const CRITICAL_TARGET: &str = "acbs::critical";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn from_tracing(level: &Level, target: &str) -> Self {
        match *level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warning,
            Level::ERROR if target == CRITICAL_TARGET => Severity::Critical,
            Level::ERROR => Severity::Error,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single log message on its way to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(severity: Severity, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            target: target.into(),
            message: message.into(),
        }
    }
}

/// Turns a record into the final line written to a sink
pub trait LogFormatter {
    fn format(&self, record: &LogRecord) -> String;
}

impl<F: LogFormatter + ?Sized> LogFormatter for Box<F> {
    fn format(&self, record: &LogRecord) -> String {
        (**self).format(record)
    }
}

/// Standard rendering: the message, optionally preceded by a local
/// timestamp and the record's target
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseFormatter {
    pub show_time: bool,
    pub show_target: bool,
}

impl BaseFormatter {
    pub fn new(show_time: bool, show_target: bool) -> Self {
        Self {
            show_time,
            show_target,
        }
    }
}

impl LogFormatter for BaseFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut line = String::new();
        if self.show_time {
            line.push_str(&Local::now().format("%H:%M:%S%.3f ").to_string());
        }
        if self.show_target && !record.target.is_empty() {
            line.push_str(&record.target);
            line.push_str(": ");
        }
        line.push_str(&record.message);
        line
    }
}

/// Prefixes a colored level tag, then hands the record to `inner`.
///
/// Only DEBUG, INFO, WARNING, ERROR and CRITICAL are tagged; anything
/// else is passed to `inner` untouched.
#[derive(Debug, Clone)]
pub struct TaggedFormatter<F = BaseFormatter> {
    palette: Palette,
    inner: F,
}

impl TaggedFormatter<BaseFormatter> {
    pub fn new(palette: Palette) -> Self {
        Self::wrap(palette, BaseFormatter::default())
    }
}

impl<F> TaggedFormatter<F> {
    pub fn wrap(palette: Palette, inner: F) -> Self {
        Self { palette, inner }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The colored tag for `severity`, without brackets
    pub fn tag(&self, severity: Severity) -> Option<String> {
        let p = &self.palette;
        let (color, label) = match severity {
            Severity::Debug => (p.green, "DEBUG"),
            Severity::Info => (p.lt_cyan, "INFO"),
            Severity::Warning => (p.brown, "WARN"),
            Severity::Error => (p.red, "ERROR"),
            Severity::Critical => (p.yellow, "CRIT"),
            Severity::Trace => return None,
        };
        Some(p.paint(color, label))
    }
}

impl<F: LogFormatter> LogFormatter for TaggedFormatter<F> {
    fn format(&self, record: &LogRecord) -> String {
        match self.tag(record.severity) {
            Some(tag) => {
                let tagged = LogRecord {
                    message: format!("[{}] {}", tag, record.message),
                    ..record.clone()
                };
                self.inner.format(&tagged)
            }
            None => self.inner.format(record),
        }
    }
}

/// Collects the message and any extra fields of a tracing event
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let mut out = self.message;
        for field in self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&field);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// `tracing-subscriber` event format that renders through a [`LogFormatter`]
pub struct AcbsEventFormat<F = TaggedFormatter> {
    formatter: F,
}

impl AcbsEventFormat<TaggedFormatter> {
    pub fn new(palette: Palette, show_time: bool, show_target: bool) -> Self {
        Self::with_formatter(TaggedFormatter::wrap(
            palette,
            BaseFormatter::new(show_time, show_target),
        ))
    }
}

impl<F> AcbsEventFormat<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }
}

impl<S, N, F> FormatEvent<S, N> for AcbsEventFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: LogFormatter,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord::new(
            Severity::from_tracing(meta.level(), meta.target()),
            meta.target(),
            visitor.finish(),
        );
        writeln!(writer, "{}", self.formatter.format(&record))
    }
}
