//! JSON-RPC 2.0 types for MCP transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request.
///
/// `id`, `params`, and the version tag are all optional on the wire; an
/// absent `id` decodes to [`RequestId::Null`] and is echoed back as `null`.
/// `method` is defaulted to the empty string so that a parseable object
/// without one dispatches as an unknown method rather than a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, "2.0" when present.
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    /// Request ID, echoed verbatim in the response.
    #[serde(default)]
    pub id: RequestId,
    /// Method name.
    #[serde(default)]
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request).
    pub id: RequestId,
    /// Result value.
    pub result: Value,
}

/// JSON-RPC 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request; `null` for parse errors).
    pub id: RequestId,
    /// Error details.
    pub error: JsonRpcError,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

/// Request ID: a number, a string, or null (absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric ID.
    Number(i64),
    /// String ID.
    String(String),
    /// Absent ID, serialized as `null`.
    #[default]
    Null,
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The method (or tool) does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

fn default_version() -> String {
    "2.0".to_string()
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
            },
        }
    }
}
