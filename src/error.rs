//! Error types surfaced by the console logger.
use std::io;
use thiserror::Error;

/// A log line could not be delivered to its sink.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write log line: {0}")]
    Write(#[source] io::Error),

    #[error("failed to flush log sink: {0}")]
    Flush(#[source] io::Error),
}
