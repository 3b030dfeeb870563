//! Transport-layer error type.

use thiserror::Error;

/// Errors from the transport layer.
///
/// Malformed request content is not a transport error — it becomes a
/// parse-error envelope on the output stream. Only I/O faults live here.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(String),
}
