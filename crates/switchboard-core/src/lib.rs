//! switchboard-core - routing and tool dispatch for the contact-center demo
//!
//! This crate provides:
//! - The department directory the gateway routes against
//! - The order catalog and troubleshooting rule set backing the department agents
//! - Tool handlers for routing, orders, and support, plus the registry that
//!   dispatches them by name
//! - Agent definitions (gateway, orders, support) bundling persona, prompt
//!   context, language, and tools
//!
//! Handlers are pure computations over immutable seed data plus the current
//! timestamp; the hosting server (switchboard-server) owns sessions and
//! performs the transfers handlers request.

pub mod agents;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod ids;
pub mod rules;
pub mod tools;
pub mod types;

// Re-export main types for convenience
pub use agents::{AgentCard, AgentDefinition, Language, PromptSection, gateway_agent, orders_agent, support_agent};
pub use catalog::{Order, OrderCatalog, OrderStatus};
pub use directory::{Department, DepartmentDirectory, DepartmentKey, GATEWAY_ROUTE};
pub use error::DispatchError;
pub use tools::{ToolHandler, ToolRegistry};
pub use types::{ToolDefinition, ToolResult, Transfer};
