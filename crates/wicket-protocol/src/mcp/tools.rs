//! MCP tools/* method types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single tool definition in the MCP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Response for `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools, in registration order.
    pub tools: Vec<McpToolDefinition>,
}

/// Request params for `tools/call`.
///
/// Both fields are defaulted: a missing params object yields an empty tool
/// name (rejected downstream as an unknown tool) and an empty argument bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke.
    #[serde(default)]
    pub name: String,
    /// Arguments to pass.
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

impl Default for ToolsCallParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            arguments: empty_arguments(),
        }
    }
}

fn empty_arguments() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Content item in a tool call response.
///
/// Results are always delivered as a single text block containing
/// serialized structured data, never as structured data directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text { text: String },
}

/// Response for `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallResult {
    /// Content items returned by the tool.
    pub content: Vec<ToolContent>,
}
