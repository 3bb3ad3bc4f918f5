//! Dispatch-level errors
//!
//! Conversational misses (unknown order, unknown department) are NOT errors;
//! handlers answer those with a clarifying message. Errors here are contract
//! violations between the hosting runtime and an agent's tool registry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The runtime asked for a tool name the agent does not expose
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
