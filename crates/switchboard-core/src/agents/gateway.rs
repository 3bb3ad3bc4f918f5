//! Gateway agent — the main line that routes callers to a department

use std::sync::Arc;

use super::AgentDefinition;
use crate::directory::{DepartmentDirectory, GATEWAY_ROUTE};
use crate::tools::routing::RouteCallTool;

/// Build the gateway agent over the given directory
pub fn gateway_agent(directory: Arc<DepartmentDirectory>) -> AgentDefinition {
    let departments = directory
        .entries()
        .iter()
        .map(|d| format!("{} - {}", capitalize(&d.key.to_string()), d.description))
        .collect();

    AgentDefinition::new("gateway-agent", GATEWAY_ROUTE)
        .prompt_section(
            "Role",
            "You are the main gateway for our contact center. \
             Determine what the caller needs and route them appropriately.",
        )
        .prompt_bullets("Available Departments", departments)
        .prompt_bullets(
            "Instructions",
            vec![
                "Greet the caller warmly".to_string(),
                "Ask how you can help".to_string(),
                "Route to the appropriate department".to_string(),
                "If unclear, ask clarifying questions".to_string(),
            ],
        )
        .tool(Arc::new(RouteCallTool::new(directory)))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_agent_shape() {
        let agent = gateway_agent(Arc::new(DepartmentDirectory::standard()));
        assert_eq!(agent.name(), "gateway-agent");
        assert_eq!(agent.route(), "/gateway");
        assert_eq!(agent.tools().len(), 1);
        assert!(agent.tools().get("route_call").is_some());
    }

    #[test]
    fn test_gateway_prompt_lists_departments() {
        let agent = gateway_agent(Arc::new(DepartmentDirectory::standard()));
        let departments = agent
            .prompt()
            .iter()
            .find(|s| s.title == "Available Departments")
            .unwrap();
        assert_eq!(departments.bullets.len(), 3);
        assert!(departments.bullets[0].starts_with("Orders - "));
    }
}
