//! HTTP wire shapes between the hosting runtime and the agent server

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use switchboard_core::{ToolDefinition, ToolResult, Transfer};

/// Body of a tool invocation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// Session the invocation belongs to; created on first use
    #[serde(default = "default_session_id")]
    pub session_id: String,
    /// Structured tool arguments
    #[serde(default)]
    pub args: Map<String, Value>,
}

fn default_session_id() -> String {
    "main".to_string()
}

impl Default for InvokeRequest {
    fn default() -> Self {
        Self {
            session_id: default_session_id(),
            args: Map::new(),
        }
    }
}

/// Outcome of a tool invocation, as returned to the runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub session_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<Transfer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_patch: Option<Map<String, Value>>,
    #[serde(default)]
    pub post_process: bool,
}

impl InvokeResponse {
    pub fn new(session_id: impl Into<String>, result: ToolResult) -> Self {
        Self {
            session_id: session_id.into(),
            message: result.message,
            transfer: result.transfer,
            data_patch: result.data_patch,
            post_process: result.post_process,
        }
    }
}

/// Tool listing for one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListing {
    pub agent: String,
    pub tools: Vec<ToolDefinition>,
}

/// Error payload for dispatch failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_request_defaults() {
        let req: InvokeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.session_id, "main");
        assert!(req.args.is_empty());
    }

    #[test]
    fn test_invoke_request_with_args() {
        let req: InvokeRequest = serde_json::from_str(
            r#"{"session_id": "caller-7", "args": {"order_id": "ORD-001"}}"#,
        )
        .unwrap();
        assert_eq!(req.session_id, "caller-7");
        assert_eq!(req.args["order_id"], "ORD-001");
    }

    #[test]
    fn test_invoke_response_omits_empty_directives() {
        let resp = InvokeResponse::new("main", ToolResult::reply("hello"));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("transfer"));
        assert!(!json.contains("data_patch"));
    }

    #[test]
    fn test_invoke_response_carries_transfer() {
        let result = ToolResult::reply("bye").with_transfer("/orders", "Goodbye!", true);
        let resp = InvokeResponse::new("main", result);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["transfer"]["target_route"], "/orders");
        assert_eq!(json["transfer"]["final"], true);
        assert_eq!(json["post_process"], true);
    }
}
