//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between client
//! and server. The server's reply is a fixed capability/version payload;
//! client params are not validated.

use serde::{Deserialize, Serialize};

/// Tool-related capability marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCapability {}

/// Resource-related capability marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceCapability {}

/// Prompt-related capability marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptCapability {}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability (present: this server exposes tools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapability>,
    /// Resources capability (present for protocol completeness).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapability>,
    /// Prompts capability (present for protocol completeness).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<PromptCapability>,
}

/// Server info returned during initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// MCP protocol version supported by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_result_roundtrip() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolCapability {}),
                resources: Some(ResourceCapability {}),
                prompts: Some(PromptCapability {}),
            },
            server_info: ServerInfo {
                name: "wicket".to_string(),
                version: "0.1.0".to_string(),
            },
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(json.contains("protocolVersion"));
        assert!(json.contains("serverInfo"));
        let back: InitializeResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.server_info.name, "wicket");
    }

    #[test]
    fn absent_capabilities_are_skipped() {
        let caps = ServerCapabilities::default();
        let json = serde_json::to_string(&caps).expect("ser");
        assert_eq!(json, "{}");
    }
}
