//! The fixed tool catalog: registration, introspection, resolution.

use std::collections::HashMap;

use thiserror::Error;

use wicket_types::{ToolName, ToolSpec};

use crate::tool::QueryTool;

/// Errors from registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A tool name was registered twice. Fatal at startup.
    #[error("duplicate tool registration: {name}")]
    Duplicate { name: ToolName },
}

/// Holds the authoritative list of callable tools and their contracts.
///
/// Built once at process start; insertion order is preserved for
/// `tools/list` introspection.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn QueryTool>>,
    by_name: HashMap<ToolName, usize>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under its declared name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Duplicate` if the name is already taken.
    pub fn register(&mut self, tool: Box<dyn QueryTool>) -> Result<(), RegistryError> {
        let name = tool.spec().name;
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.by_name.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Returns every tool's contract, in registration order.
    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    /// Resolves a wire name to its handler by exact match.
    pub fn resolve(&self, name: &str) -> Option<&dyn QueryTool> {
        let tool_name = ToolName::from_name(name)?;
        self.by_name
            .get(&tool_name)
            .map(|&idx| self.tools[idx].as_ref())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use wicket_types::ToolName;

    struct Stub(ToolName);

    #[async_trait]
    impl QueryTool for Stub {
        fn spec(&self) -> ToolSpec {
            ToolSpec {
                name: self.0,
                description: "stub".into(),
                arguments: Vec::new(),
            }
        }

        async fn call(&self, _arguments: Value) -> Result<Value, ToolError> {
            Ok(json!({"ok": true}))
        }
    }

    #[test]
    fn register_and_resolve() {
        let mut reg = ToolRegistry::new();
        reg.register(Box::new(Stub(ToolName::GetTeamInfo)))
            .expect("register");
        assert!(reg.resolve("get_team_info").is_some());
        assert!(reg.resolve("get_venue_info").is_none());
        assert!(reg.resolve("not_a_tool").is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut reg = ToolRegistry::new();
        reg.register(Box::new(Stub(ToolName::GetTeamInfo)))
            .expect("first");
        let err = reg
            .register(Box::new(Stub(ToolName::GetTeamInfo)))
            .unwrap_err();
        assert!(err.to_string().contains("get_team_info"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut reg = ToolRegistry::new();
        reg.register(Box::new(Stub(ToolName::GetVenueInfo)))
            .expect("r1");
        reg.register(Box::new(Stub(ToolName::GetTeamInfo)))
            .expect("r2");
        let names: Vec<ToolName> = reg.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec![ToolName::GetVenueInfo, ToolName::GetTeamInfo]);
    }

    #[tokio::test]
    async fn resolved_tool_is_callable() {
        let mut reg = ToolRegistry::new();
        reg.register(Box::new(Stub(ToolName::GetTeamInfo)))
            .expect("register");
        let tool = reg.resolve("get_team_info").expect("resolve");
        let result = tool.call(json!({})).await.expect("call");
        assert_eq!(result["ok"], true);
    }
}
