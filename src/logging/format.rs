//! Pure formatting of console log lines.
//!
//! Nothing in here touches I/O, so the exact shape of a line can be checked
//! against fixed timestamps.
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// `strftime` pattern for the bracketed timestamp prefix.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width the severity tag is padded to, so messages line up.
const SEVERITY_WIDTH: usize = 5;

/// The severity of a log line. Only `INFO` is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single log line before it is rendered.
///
/// Lives only for the duration of one `Logger::log` call.
#[derive(Debug, Clone)]
pub struct LogRecord<'a, Tz: TimeZone = Local> {
    pub timestamp: DateTime<Tz>,
    pub severity: Severity,
    /// Opaque caller text, emitted verbatim.
    pub message: &'a str,
}

impl<'a, Tz: TimeZone> LogRecord<'a, Tz> {
    pub fn info(timestamp: DateTime<Tz>, message: &'a str) -> Self {
        Self {
            timestamp,
            severity: Severity::Info,
            message,
        }
    }
}

impl<Tz> fmt::Display for LogRecord<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<width$} {}",
            self.timestamp.format(LOG_TIMESTAMP_FORMAT),
            self.severity,
            self.message,
            width = SEVERITY_WIDTH
        )
    }
}

/// Renders `[YYYY-MM-DD HH:MM:SS] INFO  <message>` without a trailing newline.
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    LogRecord::info(timestamp.clone(), message).to_string()
}
