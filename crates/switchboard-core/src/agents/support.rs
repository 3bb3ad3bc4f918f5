//! Support agent — troubleshooting and tickets

use std::sync::Arc;

use super::AgentDefinition;
use crate::directory::SUPPORT_ROUTE;
use crate::tools::routing::TransferToGatewayTool;
use crate::tools::support::{CreateTicketTool, TroubleshootTool};

/// Build the support agent
pub fn support_agent() -> AgentDefinition {
    AgentDefinition::new("support-agent", SUPPORT_ROUTE)
        .prompt_section(
            "Role",
            "You are a technical support specialist. Help customers troubleshoot \
             issues and resolve problems.",
        )
        .prompt_bullets(
            "Instructions",
            vec![
                "Listen carefully to the issue".to_string(),
                "Ask clarifying questions".to_string(),
                "Provide step-by-step troubleshooting".to_string(),
                "Create tickets for complex issues".to_string(),
                "Escalate when needed".to_string(),
            ],
        )
        .tool(Arc::new(TroubleshootTool))
        .tool(Arc::new(CreateTicketTool))
        .tool(Arc::new(TransferToGatewayTool))
}
