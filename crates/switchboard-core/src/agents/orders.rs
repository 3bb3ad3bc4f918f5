//! Orders agent — order status, tracking, and returns

use std::sync::Arc;

use super::AgentDefinition;
use crate::catalog::OrderCatalog;
use crate::directory::ORDERS_ROUTE;
use crate::tools::orders::{GetOrderStatusTool, InitiateReturnTool};
use crate::tools::routing::TransferToSupportTool;

/// Build the orders agent over the given catalog
pub fn orders_agent(catalog: Arc<OrderCatalog>) -> AgentDefinition {
    AgentDefinition::new("orders-agent", ORDERS_ROUTE)
        .prompt_section(
            "Role",
            "You are an orders specialist. Help customers with order status, \
             tracking, and returns.",
        )
        .prompt_bullets(
            "Instructions",
            vec![
                "Ask for order number if not provided".to_string(),
                "Provide clear status updates".to_string(),
                "Offer to help with returns if needed".to_string(),
                "Transfer to support for technical issues".to_string(),
            ],
        )
        .tool(Arc::new(GetOrderStatusTool::new(catalog.clone())))
        .tool(Arc::new(InitiateReturnTool::new(catalog)))
        .tool(Arc::new(TransferToSupportTool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_agent_shape() {
        let agent = orders_agent(Arc::new(OrderCatalog::seed()));
        assert_eq!(agent.name(), "orders-agent");
        assert_eq!(agent.route(), "/orders");
        assert_eq!(agent.tools().len(), 3);
        for tool in ["get_order_status", "initiate_return", "transfer_to_support"] {
            assert!(agent.tools().get(tool).is_some(), "missing {tool}");
        }
    }
}
