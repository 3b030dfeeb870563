//! # wicket-transport-stdio
//!
//! Stdio transport adapter for MCP JSON-RPC communication.
//!
//! Provides line-delimited JSON transport over stdin/stdout, and a server
//! loop that ties it together: one request per input line, one response
//! per output line, end of input terminates the loop cleanly.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
// McpHandler lives in wicket-mcp; re-exported for convenience.
pub use server::McpServer;
pub use transport::StdioTransport;
pub use wicket_mcp::{JsonRpcOutput, McpHandler};
