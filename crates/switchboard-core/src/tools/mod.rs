//! Tool registry and dispatch
//!
//! Each agent exposes its tools through a registry mapping tool name to a
//! handler plus its argument schema. The hosting runtime lists definitions
//! and invokes tools by name; handlers never fail conversationally — a
//! miss is answered with a clarifying message, and only an unknown tool
//! name is a dispatch error.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::DispatchError;
use crate::types::{ToolDefinition, ToolResult};

pub mod orders;
pub mod routing;
pub mod support;

/// Individual tool handler
#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    /// Filler lines the runtime may speak while the tool executes
    fn fillers(&self) -> Vec<String> {
        Vec::new()
    }
    async fn execute(&self, args: Value) -> ToolResult;
}

/// Registry of the tools one agent exposes
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool handler
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.name().to_string();
        debug!("Registering tool: {}", name);
        self.tools.insert(name, handler);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of all registered tools, for the hosting runtime
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|handler| ToolDefinition {
                name: handler.name().to_string(),
                description: handler.description().to_string(),
                input_schema: handler.input_schema(),
                fillers: handler.fillers(),
            })
            .collect()
    }

    /// Invoke a tool by name
    pub async fn invoke(&self, name: &str, args: Value) -> Result<ToolResult, DispatchError> {
        let handler = self
            .tools
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        debug!("Executing tool: {} with args: {:?}", name, args);
        Ok(handler.execute(args).await)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to build a JSON schema for tool input
pub fn json_schema(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Read a string argument; a missing or non-string value folds to the
/// empty string and takes the not-found conversational branch downstream.
pub(crate) fn str_arg(args: &Value, key: &str) -> String {
    args.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Read an optional string argument with a default
pub(crate) fn str_arg_or(args: &Value, key: &str, default: &str) -> String {
    args.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyTool;

    #[async_trait]
    impl ToolHandler for DummyTool {
        fn name(&self) -> &str {
            "dummy"
        }

        fn description(&self) -> &str {
            "A dummy tool for testing"
        }

        fn input_schema(&self) -> Value {
            json_schema(
                serde_json::json!({
                    "message": {
                        "type": "string",
                        "description": "Test message"
                    }
                }),
                vec!["message"],
            )
        }

        async fn execute(&self, args: Value) -> ToolResult {
            ToolResult::reply(format!("echo: {}", str_arg(&args, "message")))
        }
    }

    #[tokio::test]
    async fn test_registry_invoke() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool));
        assert_eq!(registry.len(), 1);

        let result = registry
            .invoke("dummy", serde_json::json!({"message": "test"}))
            .await
            .unwrap();
        assert_eq!(result.message, "echo: test");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_dispatch_error() {
        let registry = ToolRegistry::new();
        let err = registry
            .invoke("nonexistent", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(name) if name == "nonexistent"));
    }

    #[tokio::test]
    async fn test_missing_arg_folds_to_empty() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool));
        let result = registry.invoke("dummy", serde_json::json!({})).await.unwrap();
        assert_eq!(result.message, "echo: ");
    }

    #[test]
    fn test_definitions() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool));
        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "dummy");
        assert_eq!(defs[0].input_schema["required"][0], "message");
    }
}
