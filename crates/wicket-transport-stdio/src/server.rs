//! MCP server loop over the stdio transport.
//!
//! Reads one JSON-RPC request per line, dispatches it, and writes exactly
//! one response line — including for requests without an `id` (echoed as
//! null) and for unparseable lines (parse-error envelope with null id).
//! Requests are strictly sequential: each is fully handled before the
//! next line is read.

use tracing::{debug, error, info, warn};

use wicket_mcp::{JsonRpcOutput, McpHandler};
use wicket_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcRequest, RequestId};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream is closed.
    ///
    /// No single request's failure terminates the loop; every failure is
    /// written as a failure envelope and the next line is read.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server starting on stdio");

        loop {
            let line = match self.transport.read_line().await? {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
            };

            match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => {
                    debug!(method = %request.method, id = ?request.id, "received request");
                    let output = self.handler.dispatch(&request).await;
                    self.write_output(&output).await?;
                }
                Err(e) => {
                    warn!(error = %e, "failed to parse JSON-RPC message");
                    let err = JsonRpcErrorResponse::error(
                        RequestId::Null,
                        error_codes::PARSE_ERROR,
                        format!("parse error: {e}"),
                    );
                    self.write_output(&JsonRpcOutput::Error(err)).await?;
                }
            }
        }
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Write(e.to_string()))
            }
        }
    }
}
