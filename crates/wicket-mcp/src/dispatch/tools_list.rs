//! Handles the `tools/list` MCP method.

use serde_json::Value;

use wicket_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use wicket_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};
use wicket_registry::ToolRegistry;
use wicket_types::ToolArgument;

use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request with the registry's catalog,
/// serialized in registration order.
pub(crate) fn handle(id: RequestId, registry: &ToolRegistry) -> JsonRpcOutput {
    let definitions: Vec<McpToolDefinition> = registry
        .list()
        .into_iter()
        .map(|spec| McpToolDefinition {
            name: spec.name.to_string(),
            description: Some(spec.description),
            input_schema: build_input_schema(&spec.arguments),
        })
        .collect();

    let result = ToolsListResult { tools: definitions };

    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}

/// Builds a JSON Schema `inputSchema` from declared tool arguments.
///
/// The property set is closed (`additionalProperties: false`): the schema
/// itself rejects unrecognized argument names.
pub(crate) fn build_input_schema(arguments: &[ToolArgument]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for arg in arguments {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(arg.arg_type.clone()));
        prop.insert(
            "description".to_string(),
            Value::String(arg.description.clone()),
        );
        if let Some(values) = &arg.enum_values {
            prop.insert(
                "enum".to_string(),
                Value::Array(values.iter().map(|v| Value::String(v.clone())).collect()),
            );
        }
        if let Some(default) = &arg.default {
            prop.insert("default".to_string(), Value::String(default.clone()));
        }
        properties.insert(arg.name.clone(), Value::Object(prop));
        if arg.required {
            required.push(Value::String(arg.name.clone()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema.insert("additionalProperties".to_string(), Value::Bool(false));

    Value::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wicket_types::ToolArgument;

    #[test]
    fn build_input_schema_empty_args() {
        let schema = build_input_schema(&[]);
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].as_object().expect("obj").is_empty());
        assert!(schema.get("required").is_none());
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn build_input_schema_with_args() {
        let args = vec![
            ToolArgument::string("match_id", "Match ID").required(),
            ToolArgument::integer("innings", "Innings number (1 or 2)"),
        ];
        let schema = build_input_schema(&args);
        assert_eq!(schema["properties"]["match_id"]["type"], "string");
        assert_eq!(schema["properties"]["innings"]["type"], "integer");
        let req = schema["required"].as_array().expect("arr");
        assert_eq!(req.len(), 1);
        assert_eq!(req[0], "match_id");
    }

    #[test]
    fn build_input_schema_with_enum_and_default() {
        let args = vec![ToolArgument::string("stat_type", "Type of stats")
            .with_enum(&["batting", "bowling", "fielding", "all"])
            .with_default("all")];
        let schema = build_input_schema(&args);
        let prop = &schema["properties"]["stat_type"];
        assert_eq!(prop["enum"].as_array().expect("arr").len(), 4);
        assert_eq!(prop["default"], "all");
    }
}
