//! Order catalog — simulated order database

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

/// A single order record. Tracking is present only once the order has
/// shipped (seed-data convention, not enforced at runtime).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    pub items: Vec<String>,
}

/// Immutable order lookup, built once at startup
#[derive(Debug, Clone)]
pub struct OrderCatalog {
    orders: HashMap<String, Order>,
}

impl OrderCatalog {
    /// The demo seed data
    pub fn seed() -> Self {
        let orders = [
            Order {
                id: "ORD-001".to_string(),
                status: OrderStatus::Shipped,
                tracking: Some("1Z999AA10123456784".to_string()),
                items: vec!["Widget Pro".to_string()],
            },
            Order {
                id: "ORD-002".to_string(),
                status: OrderStatus::Processing,
                tracking: None,
                items: vec!["Gadget Plus".to_string(), "Cable".to_string()],
            },
            Order {
                id: "ORD-003".to_string(),
                status: OrderStatus::Delivered,
                tracking: Some("1Z999AA10123456785".to_string()),
                items: vec!["Super Device".to_string()],
            },
        ];
        Self {
            orders: orders.into_iter().map(|o| (o.id.clone(), o)).collect(),
        }
    }

    /// Look up an order, normalizing the id to uppercase first
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(&order_id.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
