//! MCP prompts/* method types.

use serde::{Deserialize, Serialize};

/// A prompt definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpPromptDefinition {
    /// Prompt name.
    pub name: String,
    /// Prompt description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response for `prompts/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsListResult {
    /// Available prompts (this server exposes none).
    pub prompts: Vec<McpPromptDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_serializes_to_empty_array() {
        let r = PromptsListResult::default();
        let s = serde_json::to_string(&r).expect("ser");
        assert_eq!(s, r#"{"prompts":[]}"#);
    }
}
