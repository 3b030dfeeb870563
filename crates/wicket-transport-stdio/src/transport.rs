//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single UTF-8 line terminated by `\n`,
//! following the MCP stdio transport convention.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Reads request lines from an input stream and writes response lines to
/// an output stream.
///
/// Generic over reader/writer so tests can drive it with in-memory
/// buffers instead of real stdio.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line, trimmed of surrounding whitespace.
    ///
    /// Returns `None` on end of input (the clean-shutdown signal).
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim().to_string();
        trace!(len = trimmed.len(), "read message");
        Ok(Some(trimmed))
    }

    /// Writes one response line, newline-terminated and flushed.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        let framed = format!("{message}\n");
        self.writer
            .write_all(framed.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;
        Ok(())
    }
}
