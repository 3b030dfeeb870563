//! MCP resources/* method types.

use serde::{Deserialize, Serialize};

/// A resource definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResourceDefinition {
    /// Resource URI.
    pub uri: String,
    /// Resource name.
    pub name: String,
    /// Resource description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response for `resources/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesListResult {
    /// Available resources (this server exposes none).
    pub resources: Vec<McpResourceDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_serializes_to_empty_array() {
        let r = ResourcesListResult::default();
        let s = serde_json::to_string(&r).expect("ser");
        assert_eq!(s, r#"{"resources":[]}"#);
    }
}
