//! The timestamped console logger.
use super::clock::{Clock, SystemClock};
use super::format::format_line;
use super::sink::{LineSink, StdoutSink};
use crate::error::LogError;
use tracing::warn;

/// Lines emitted by [`Logger::self_test`], in order.
pub const SELF_TEST_MESSAGES: [&str; 3] = [
    "Logger test started",
    "Testing log_info function",
    "Logger test completed",
];

/// Writes one `[timestamp] INFO  message` line per call to its sink.
///
/// Every call is synchronous: the line has been flushed to the sink by the
/// time `log` returns.
pub struct Logger<S: LineSink, C: Clock = SystemClock> {
    sink: S,
    clock: C,
    /// Set after the first absorbed failure in `log_or_warn`.
    warned: bool,
}

impl Logger<StdoutSink> {
    /// A logger writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(StdoutSink::stdout())
    }
}

impl<S: LineSink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<S: LineSink, C: Clock> Logger<S, C> {
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self {
            sink,
            clock,
            warned: false,
        }
    }

    /// Emits `message` as a single INFO line.
    ///
    /// # Errors
    ///
    /// Returns a `LogError` if the sink cannot accept or flush the line.
    pub fn log(&mut self, message: &str) -> Result<(), LogError> {
        let line = format_line(&self.clock.now(), message);
        self.sink.write_line(&line)
    }

    /// Same as [`Logger::log`]; INFO is the only severity.
    pub fn info(&mut self, message: &str) -> Result<(), LogError> {
        self.log(message)
    }

    /// Emits `message`, absorbing sink failures.
    ///
    /// The first failure is reported as a diagnostic; later ones are dropped
    /// silently so a dead console doesn't flood stderr.
    pub fn log_or_warn(&mut self, message: &str) {
        if let Err(e) = self.log(message) {
            if !self.warned {
                warn!("console log line dropped: {}", e);
                self.warned = true;
            }
        }
    }

    /// Logs the fixed self-test sequence.
    pub fn self_test(&mut self) -> Result<(), LogError> {
        for message in SELF_TEST_MESSAGES {
            self.log(message)?;
        }
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
