//! Line reader and writer

use crate::mcp::error::McpError;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Reads one message per line
pub struct LineReader<R> {
    inner: R,
    buffer: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    /// Next line without its terminator, or `None` at end of stream.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as
    /// [`McpError::Parse`]; the stream stays usable. Only I/O failures
    /// surface as [`McpError::Transport`].
    pub async fn next_line(&mut self) -> Result<Option<String>, McpError> {
        self.buffer.clear();
        let bytes_read = self.inner.read_until(b'\n', &mut self.buffer).await?;
        if bytes_read == 0 {
            return Ok(None);
        }
        while matches!(self.buffer.last(), Some(b'\n' | b'\r')) {
            self.buffer.pop();
        }
        let line = std::str::from_utf8(&self.buffer)
            .map_err(|e| McpError::parse(format!("line is not valid UTF-8: {}", e)))?;
        Ok(Some(line.to_string()))
    }
}

/// Writes one JSON message per line and flushes after each
pub struct LineWriter<W> {
    inner: W,
}

impl<W: AsyncWrite + Unpin> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub async fn send<T: Serialize>(&mut self, message: &T) -> Result<(), McpError> {
        let mut json = serde_json::to_string(message)?;
        json.push('\n');
        self.inner.write_all(json.as_bytes()).await?;
        self.inner.flush().await?;
        Ok(())
    }
}
