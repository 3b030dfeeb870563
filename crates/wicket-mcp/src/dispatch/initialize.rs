//! Handles the `initialize` MCP method.

use wicket_protocol::mcp::initialize::{
    InitializeResult, PromptCapability, ResourceCapability, ServerCapabilities, ServerInfo,
    ToolCapability, PROTOCOL_VERSION,
};
use wicket_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `initialize` request with the fixed capability payload.
/// Client params are not validated.
pub(crate) fn handle(id: RequestId) -> JsonRpcOutput {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability {}),
            resources: Some(ResourceCapability {}),
            prompts: Some(PromptCapability {}),
        },
        server_info: ServerInfo {
            name: "wicket".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
