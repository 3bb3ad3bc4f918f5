//! Shared types for switchboard-core

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Directive telling the hosting server to hand the session to another route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub target_route: String,
    pub farewell: String,
    /// When true the previous agent's ownership of the session ends;
    /// control does not return to it.
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// Structured outcome of a tool invocation.
///
/// Every handler produces one of these: a spoken message, optionally a
/// transfer directive the hosting server effects, and optionally a patch
/// merged into the session's global data (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<Transfer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_patch: Option<Map<String, Value>>,
    /// Speak the message before acting on the transfer
    #[serde(default)]
    pub post_process: bool,
}

impl ToolResult {
    /// A plain spoken reply with no side directives
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transfer: None,
            data_patch: None,
            post_process: false,
        }
    }

    /// Attach a transfer directive. Sets `post_process` so the runtime
    /// speaks the message before redirecting the session.
    pub fn with_transfer(
        mut self,
        target_route: impl Into<String>,
        farewell: impl Into<String>,
        is_final: bool,
    ) -> Self {
        self.transfer = Some(Transfer {
            target_route: target_route.into(),
            farewell: farewell.into(),
            is_final,
        });
        self.post_process = true;
        self
    }

    /// Attach a global-data patch
    pub fn with_data_patch(mut self, patch: Map<String, Value>) -> Self {
        self.data_patch = Some(patch);
        self
    }
}

/// Definition of a tool as exposed to the hosting runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    /// Filler lines the runtime may speak while the tool executes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fillers: Vec<String>,
}
