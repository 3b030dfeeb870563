//! # wicket-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions.
//! This crate defines the wire format for communication between
//! MCP clients and the wicket statistics server.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::*;
pub use mcp::methods;
