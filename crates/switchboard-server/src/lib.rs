//! switchboard-server — HTTP hosting for the contact-center agents
//!
//! Hosts each agent definition at its route with a uniform list-tools /
//! invoke-tool surface, owns caller sessions (global-data patches, transfer
//! hand-offs), and exposes the liveness and readiness endpoints.

pub mod protocol;
pub mod server;
pub mod session;

pub use server::AgentServer;
pub use session::{Session, SessionManager};
