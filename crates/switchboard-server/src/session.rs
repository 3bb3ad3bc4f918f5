//! Session management — each caller gets an isolated session
//!
//! A session tracks which agent route currently owns the conversation and
//! the global data tools have patched into it. Sessions are created on
//! first use and always start on the gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use switchboard_core::ToolResult;

/// A single caller session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Route of the agent that currently owns the conversation
    pub current_route: String,
    /// Session-global data patched by tools (last write wins)
    pub global_data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub tool_invocations: u64,
}

impl Session {
    fn new(id: &str, route: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            current_route: route.to_string(),
            global_data: Map::new(),
            created_at: now,
            last_activity: now,
            tool_invocations: 0,
        }
    }
}

/// Manages all active sessions
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    initial_route: String,
}

impl SessionManager {
    /// Create a manager whose sessions start on `initial_route`, seeded
    /// with a default "main" session
    pub fn new(initial_route: impl Into<String>) -> Self {
        let initial_route = initial_route.into();
        let mut sessions = HashMap::new();
        sessions.insert("main".to_string(), Session::new("main", &initial_route));
        Self {
            sessions: Arc::new(RwLock::new(sessions)),
            initial_route,
        }
    }

    /// Get a session by id
    pub async fn get(&self, id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// List all sessions, most recently active first
    pub async fn list(&self) -> Vec<Session> {
        let sessions = self.sessions.read().await;
        let mut list: Vec<Session> = sessions.values().cloned().collect();
        list.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        list
    }

    /// Number of active sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Fold a tool result into the session: records activity, merges any
    /// data patch (last write wins), and moves the session to the transfer
    /// target when one is present. Creates the session on first use.
    /// Returns the updated session.
    pub async fn apply_result(&self, session_id: &str, result: &ToolResult) -> Session {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!("Created session '{}'", session_id);
                Session::new(session_id, &self.initial_route)
            });

        session.last_activity = Utc::now();
        session.tool_invocations += 1;

        if let Some(patch) = &result.data_patch {
            for (key, value) in patch {
                session.global_data.insert(key.clone(), value.clone());
            }
            debug!(
                "Session '{}' global data patched ({} keys)",
                session_id,
                patch.len()
            );
        }

        if let Some(transfer) = &result.transfer {
            info!(
                "Session '{}' handed off: {} -> {} (final: {})",
                session_id, session.current_route, transfer.target_route, transfer.is_final
            );
            session.current_route = transfer.target_route.clone();
        }

        session.clone()
    }
}
