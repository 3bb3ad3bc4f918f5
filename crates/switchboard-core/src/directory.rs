//! Department directory — where the gateway can send a caller

use serde::{Deserialize, Serialize};

pub const GATEWAY_ROUTE: &str = "/gateway";
pub const ORDERS_ROUTE: &str = "/orders";
pub const SUPPORT_ROUTE: &str = "/support";
pub const BILLING_ROUTE: &str = "/billing";

/// A department a caller can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentKey {
    Orders,
    Support,
    Billing,
}

impl DepartmentKey {
    /// Parse a department name case-insensitively. Unknown names are a
    /// normal conversational branch, so this returns `None` rather than
    /// an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "orders" => Some(Self::Orders),
            "support" => Some(Self::Support),
            "billing" => Some(Self::Billing),
            _ => None,
        }
    }
}

impl std::fmt::Display for DepartmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orders => write!(f, "orders"),
            Self::Support => write!(f, "support"),
            Self::Billing => write!(f, "billing"),
        }
    }
}

/// Directory entry: where a department lives and what it handles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub key: DepartmentKey,
    pub route: String,
    pub description: String,
}

/// Immutable directory of departments, built once at startup
#[derive(Debug, Clone)]
pub struct DepartmentDirectory {
    entries: Vec<Department>,
}

impl DepartmentDirectory {
    /// The standard three-department directory. Billing is a stub: a valid
    /// transfer target with no agent registered behind it.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                Department {
                    key: DepartmentKey::Orders,
                    route: ORDERS_ROUTE.to_string(),
                    description: "Order status and tracking".to_string(),
                },
                Department {
                    key: DepartmentKey::Support,
                    route: SUPPORT_ROUTE.to_string(),
                    description: "Technical support".to_string(),
                },
                Department {
                    key: DepartmentKey::Billing,
                    route: BILLING_ROUTE.to_string(),
                    description: "Billing inquiries".to_string(),
                },
            ],
        }
    }

    pub fn get(&self, key: DepartmentKey) -> Option<&Department> {
        self.entries.iter().find(|d| d.key == key)
    }

    /// Case-insensitive lookup by spoken department name
    pub fn lookup(&self, name: &str) -> Option<&Department> {
        DepartmentKey::parse(name).and_then(|key| self.get(key))
    }

    pub fn entries(&self) -> &[Department] {
        &self.entries
    }
}
