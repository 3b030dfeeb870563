//! MCP request dispatcher: routes one decoded request to its method.

use wicket_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, methods,
};
use wicket_registry::ToolRegistry;

use crate::dispatch;

/// Either envelope of a dispatched request: success or failure, never both.
#[derive(Debug)]
pub enum JsonRpcOutput {
    /// Success envelope.
    Success(JsonRpcResponse),
    /// Failure envelope.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the envelope to its single-line wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            JsonRpcOutput::Success(response) => serde_json::to_string(response),
            JsonRpcOutput::Error(error) => serde_json::to_string(error),
        }
    }
}

/// Routes JSON-RPC requests to MCP method implementations.
///
/// Holds no per-request state: each dispatch is a pure function of the
/// registry and the request, and every failure is converted into a
/// failure envelope rather than escaping.
pub struct McpHandler {
    registry: ToolRegistry,
}

impl McpHandler {
    /// Creates a handler over the given tool registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Dispatches one request and produces its response envelope.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle(id),
            methods::TOOLS_LIST => dispatch::tools_list::handle(id, &self.registry),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle(id, &request.params, &self.registry).await
            }
            methods::RESOURCES_LIST => dispatch::catalogs::handle_resources_list(id),
            methods::PROMPTS_LIST => dispatch::catalogs::handle_prompts_list(id),
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            )),
        }
    }
}
