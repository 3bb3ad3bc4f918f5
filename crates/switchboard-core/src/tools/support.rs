//! Troubleshooting and ticket tools

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use super::{ToolHandler, json_schema, str_arg, str_arg_or};
use crate::ids;
use crate::rules;
use crate::types::ToolResult;

/// Ticket priority, defaulting to medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    /// Case-insensitive parse; anything unrecognized falls back to medium
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Walk the troubleshooting rule set for a matching script
pub struct TroubleshootTool;

#[async_trait]
impl ToolHandler for TroubleshootTool {
    fn name(&self) -> &str {
        "troubleshoot"
    }

    fn description(&self) -> &str {
        "Troubleshoot a technical issue"
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "issue": {
                    "type": "string",
                    "description": "Description of the issue"
                },
                "product": {
                    "type": "string",
                    "description": "Product having issues"
                }
            }),
            vec!["issue"],
        )
    }

    fn fillers(&self) -> Vec<String> {
        vec!["Let me look into that...".to_string()]
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let issue = str_arg(&args, "issue");
        let product = str_arg_or(&args, "product", "your product");

        match rules::first_match(&issue) {
            Some(rule) => {
                debug!("Issue matched '{}' rule", rule.name);
                ToolResult::reply(rule.render(&product))
            }
            None => ToolResult::reply(
                "I'll help troubleshoot that issue. \
                 Can you provide more details about what's happening?",
            ),
        }
    }
}

/// Open a support ticket and record it in the session's global data
pub struct CreateTicketTool;

#[async_trait]
impl ToolHandler for CreateTicketTool {
    fn name(&self) -> &str {
        "create_ticket"
    }

    fn description(&self) -> &str {
        "Create a support ticket"
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "issue": {
                    "type": "string",
                    "description": "Issue description"
                },
                "priority": {
                    "type": "string",
                    "enum": ["low", "medium", "high"],
                    "description": "Ticket priority"
                }
            }),
            vec!["issue"],
        )
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let issue = str_arg(&args, "issue");
        let priority = TicketPriority::parse(&str_arg_or(&args, "priority", "medium"));

        let ticket_id = ids::timestamp_id("TKT");
        debug!("Ticket {} ({} priority): {}", ticket_id, priority, issue);

        let mut patch = Map::new();
        patch.insert("ticket_id".to_string(), ticket_id.clone().into());
        patch.insert("ticket_priority".to_string(), priority.to_string().into());

        ToolResult::reply(format!(
            "Created support ticket {} with {} priority. \
             Our team will follow up within 24 hours.",
            ticket_id, priority
        ))
        .with_data_patch(patch)
    }
}
