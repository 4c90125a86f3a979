//! This module contains the console logging for the gateway.
//!
//! Lines are rendered by a pure formatter, stamped by a `Clock`, and handed
//! to an explicit `LineSink` which flushes before returning.
pub mod clock;
pub mod format;
pub mod logger;
pub mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_line, LogRecord, Severity, LOG_TIMESTAMP_FORMAT};
pub use logger::Logger;
pub use sink::{LineSink, MemorySink, StdoutSink, WriterSink};
