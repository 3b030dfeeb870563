//! Handles the `resources/list` and `prompts/list` MCP methods.
//!
//! This server exposes neither resources nor prompts; both lists are
//! empty and present for protocol completeness.

use wicket_protocol::mcp::prompts::PromptsListResult;
use wicket_protocol::mcp::resources::ResourcesListResult;
use wicket_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `resources/list` request.
pub(crate) fn handle_resources_list(id: RequestId) -> JsonRpcOutput {
    match serde_json::to_value(ResourcesListResult::default()) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}

/// Handles the `prompts/list` request.
pub(crate) fn handle_prompts_list(id: RequestId) -> JsonRpcOutput {
    match serde_json::to_value(PromptsListResult::default()) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
