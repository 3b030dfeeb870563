//! Handler contract: the capability trait and error taxonomy for tools.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use wicket_types::ToolSpec;

/// Errors a tool call can produce.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The argument bag failed validation: unknown key, missing required
    /// key, or a value of the wrong type.
    #[error("invalid params: {message}")]
    InvalidParams { message: String },
    /// The underlying store failed during query execution.
    #[error("query error: {message}")]
    Query { message: String },
    /// Any other failure while assembling the result.
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// A named, schema-described query operation callable via `tools/call`.
///
/// Implementations validate their argument bag into a typed struct
/// (rejecting unknown and missing-required keys by construction) and then
/// execute the parameterized query, returning the tool's result mapping.
#[async_trait]
pub trait QueryTool: Send + Sync {
    /// The tool's declared contract: name, description, arguments.
    fn spec(&self) -> ToolSpec;

    /// Validates `arguments` and executes the query.
    async fn call(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Decodes a raw argument bag into a tool's typed argument struct.
///
/// The target type derives `Deserialize` with `deny_unknown_fields`, so an
/// unrecognized key or a missing required key surfaces here as
/// `ToolError::InvalidParams` with serde's message naming the key.
pub fn decode_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidParams {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Args {
        match_id: String,
        innings: Option<i64>,
    }

    #[test]
    fn decode_valid_args() {
        let args: Args = decode_args(json!({"match_id": "335982", "innings": 1})).expect("decode");
        assert_eq!(args.match_id, "335982");
        assert_eq!(args.innings, Some(1));
    }

    #[test]
    fn decode_rejects_unknown_key() {
        let err = decode_args::<Args>(json!({"match_id": "335982", "bogus": 1})).unwrap_err();
        match err {
            ToolError::InvalidParams { message } => assert!(message.contains("bogus")),
            other => panic!("expected InvalidParams, got {other}"),
        }
    }

    #[test]
    fn decode_rejects_missing_required_key() {
        let err = decode_args::<Args>(json!({"innings": 2})).unwrap_err();
        match err {
            ToolError::InvalidParams { message } => assert!(message.contains("match_id")),
            other => panic!("expected InvalidParams, got {other}"),
        }
    }

    #[test]
    fn absent_optional_decodes_to_none() {
        let args: Args = decode_args(json!({"match_id": "1"})).expect("decode");
        assert!(args.innings.is_none());
    }
}
