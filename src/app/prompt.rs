//! Waiting for the user at the console.
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, warn};

/// Size of the line buffer; at most `INPUT_BUFFER_LEN - 1` bytes are consumed.
pub const INPUT_BUFFER_LEN: usize = 10;

/// What came back from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Some input arrived; holds the number of bytes consumed.
    Line(usize),
    /// The input stream was already at end of file.
    Closed,
    /// Reading failed. Not fatal.
    Failed,
}

/// Blocks until one line (or the first `INPUT_BUFFER_LEN - 1` bytes of it)
/// has been read from `reader`.
///
/// Anything on the line beyond the buffer is left unread.
pub async fn wait_for_enter<R: AsyncRead + Unpin>(reader: R) -> Input {
    let limited = reader.take((INPUT_BUFFER_LEN - 1) as u64);
    let mut reader = BufReader::new(limited);
    let mut buf = Vec::with_capacity(INPUT_BUFFER_LEN);

    match reader.read_until(b'\n', &mut buf).await {
        Ok(0) => {
            debug!("console input closed before any line arrived");
            Input::Closed
        }
        Ok(n) => Input::Line(n),
        Err(e) => {
            warn!("failed to read console input: {}", e);
            Input::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::ReadBuf;

    struct FailingReader;

    impl AsyncRead for FailingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "tty detached")))
        }
    }

    #[tokio::test]
    async fn enter_alone_is_a_line() {
        assert_eq!(wait_for_enter(&b"\n"[..]).await, Input::Line(1));
    }

    #[tokio::test]
    async fn stops_at_newline() {
        let mut data: &[u8] = b"ok\nnext\n";
        assert_eq!(wait_for_enter(&mut data).await, Input::Line(3));
    }

    #[tokio::test]
    async fn long_lines_are_cut_at_the_buffer() {
        let mut data: &[u8] = b"abcdefghijkl\n";
        assert_eq!(
            wait_for_enter(&mut data).await,
            Input::Line(INPUT_BUFFER_LEN - 1)
        );
        assert_eq!(data, b"jkl\n");
    }

    #[tokio::test]
    async fn end_of_file_is_closed() {
        assert_eq!(wait_for_enter(&b""[..]).await, Input::Closed);
    }

    #[tokio::test]
    async fn text_without_newline_still_counts() {
        assert_eq!(wait_for_enter(&b"yes"[..]).await, Input::Line(3));
    }

    #[tokio::test]
    async fn read_errors_are_not_fatal() {
        assert_eq!(wait_for_enter(FailingReader).await, Input::Failed);
    }
}
