//! Routing and hand-off tools
//!
//! `route_call` is the gateway's only tool; the cross-department transfer
//! tools live on the department agents. All transfers are final: session
//! control passes to the target route and does not return.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::{ToolHandler, json_schema, str_arg, str_arg_or};
use crate::directory::{DepartmentDirectory, GATEWAY_ROUTE, SUPPORT_ROUTE};
use crate::types::ToolResult;

const FAREWELL: &str = "Goodbye!";

/// Route the caller to a department from the directory
pub struct RouteCallTool {
    directory: Arc<DepartmentDirectory>,
}

impl RouteCallTool {
    pub fn new(directory: Arc<DepartmentDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ToolHandler for RouteCallTool {
    fn name(&self) -> &str {
        "route_call"
    }

    fn description(&self) -> &str {
        "Route call to the appropriate department"
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "department": {
                    "type": "string",
                    "enum": ["orders", "support", "billing"],
                    "description": "Department to route to"
                },
                "reason": {
                    "type": "string",
                    "description": "Reason for the transfer"
                }
            }),
            vec!["department"],
        )
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let department = str_arg(&args, "department");
        let reason = str_arg_or(&args, "reason", "customer request");

        let Some(dept) = self.directory.lookup(&department) else {
            debug!("No department matches '{}'", department);
            return ToolResult::reply(
                "I'm not sure which department can help with that. \
                 Could you tell me more about what you need?",
            );
        };

        debug!("Routing caller to {} ({})", dept.key, reason);
        ToolResult::reply(format!("I'll transfer you to our {} team now.", dept.key))
            .with_transfer(dept.route.clone(), FAREWELL, true)
    }
}

/// Hand the caller from orders to technical support
pub struct TransferToSupportTool;

#[async_trait]
impl ToolHandler for TransferToSupportTool {
    fn name(&self) -> &str {
        "transfer_to_support"
    }

    fn description(&self) -> &str {
        "Transfer to support for technical issues"
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "issue": {
                    "type": "string",
                    "description": "Description of the issue"
                }
            }),
            vec!["issue"],
        )
    }

    async fn execute(&self, args: Value) -> ToolResult {
        debug!("Transferring to support: {}", str_arg(&args, "issue"));
        ToolResult::reply("I'll transfer you to our support team for technical assistance.")
            .with_transfer(SUPPORT_ROUTE, FAREWELL, true)
    }
}

/// Hand the caller back to the main gateway line
pub struct TransferToGatewayTool;

#[async_trait]
impl ToolHandler for TransferToGatewayTool {
    fn name(&self) -> &str {
        "transfer_to_gateway"
    }

    fn description(&self) -> &str {
        "Transfer back to gateway for other needs"
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "reason": {
                    "type": "string",
                    "description": "Reason for transfer"
                }
            }),
            vec![],
        )
    }

    async fn execute(&self, args: Value) -> ToolResult {
        debug!("Transferring to gateway: {}", str_arg(&args, "reason"));
        ToolResult::reply("I'll transfer you back to our main line.")
            .with_transfer(GATEWAY_ROUTE, FAREWELL, true)
    }
}
