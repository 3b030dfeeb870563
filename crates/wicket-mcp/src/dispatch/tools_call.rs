//! Handles the `tools/call` MCP method.

use serde_json::Value;

use wicket_protocol::mcp::tools::{ToolContent, ToolsCallParams, ToolsCallResult};
use wicket_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};
use wicket_registry::{ToolError, ToolRegistry};

use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
///
/// Missing `params` is treated as an empty object; the empty tool name it
/// yields is rejected below as an unknown tool.
pub(crate) async fn handle(
    id: RequestId,
    params: &Option<Value>,
    registry: &ToolRegistry,
) -> JsonRpcOutput {
    // 1. Extract name and arguments
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => ToolsCallParams::default(),
    };

    // 2. Resolve the tool by exact name
    let tool = match registry.resolve(&call_params.name) {
        Some(t) => t,
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown tool: {}", call_params.name),
            ));
        }
    };

    // 3. Validate and execute; no handler failure escapes the dispatcher
    tracing::debug!(tool = %call_params.name, "executing tool");
    let result = match tool.call(call_params.arguments).await {
        Ok(result) => result,
        Err(e @ ToolError::InvalidParams { .. }) => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                e.to_string(),
            ));
        }
        Err(e) => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ));
        }
    };

    // 4. Wrap the result mapping as a single pretty-printed text block
    let text = match serde_json::to_string_pretty(&result) {
        Ok(t) => t,
        Err(e) => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ));
        }
    };
    let call_result = ToolsCallResult {
        content: vec![ToolContent::Text { text }],
    };

    match serde_json::to_value(call_result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
