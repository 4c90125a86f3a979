//! Destinations for rendered log lines.
use crate::error::LogError;
use std::io::{self, Write};

/// Something that accepts one complete log line at a time.
///
/// Implementations must have delivered the line (flushed it) by the time
/// `write_line` returns.
pub trait LineSink {
    /// Writes `line` followed by a newline and flushes.
    fn write_line(&mut self, line: &str) -> Result<(), LogError>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<(), LogError> {
        (**self).write_line(line)
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<(), LogError> {
        (**self).write_line(line)
    }
}

/// Adapts any `io::Write` into a `LineSink`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

/// The console sink.
pub type StdoutSink = WriterSink<io::Stdout>;

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), LogError> {
        // One buffer so the line and its newline go out in a single write.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        self.writer
            .write_all(buf.as_bytes())
            .map_err(LogError::Write)?;
        self.writer.flush().map_err(LogError::Flush)
    }
}

/// Keeps every line in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<(), LogError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
