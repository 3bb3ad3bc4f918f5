//! Agent hosting server — Axum-based HTTP server
//!
//! Registers each agent at its route and exposes a uniform surface per
//! agent: an agent card, a tool listing, and tool invocation by name. The
//! server owns the sessions: it merges data patches and effects the
//! transfers handlers request. Liveness and readiness endpoints sit
//! alongside for the deployment environment.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Result, bail};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use switchboard_core::{AgentCard, AgentDefinition, DispatchError, GATEWAY_ROUTE};

use crate::protocol::{ErrorBody, InvokeRequest, InvokeResponse, ToolListing};
use crate::session::{Session, SessionManager};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct ServerState {
    /// Registered agents in registration order
    agents: Vec<Arc<AgentDefinition>>,
    sessions: Arc<SessionManager>,
    version: String,
}

impl ServerState {
    fn agent_by_route(&self, route: &str) -> Option<&Arc<AgentDefinition>> {
        self.agents.iter().find(|a| a.route() == route)
    }
}

/// The agent server
pub struct AgentServer {
    state: ServerState,
    bind: SocketAddr,
}

impl AgentServer {
    /// Create a server; sessions start on the gateway route
    pub fn new(bind: SocketAddr, version: impl Into<String>) -> Self {
        Self {
            state: ServerState {
                agents: Vec::new(),
                sessions: Arc::new(SessionManager::new(GATEWAY_ROUTE)),
                version: version.into(),
            },
            bind,
        }
    }

    /// Register an agent at its route. Routes must be unique.
    pub fn register(&mut self, agent: AgentDefinition) -> Result<()> {
        if self.state.agent_by_route(agent.route()).is_some() {
            bail!("route {} is already registered", agent.route());
        }
        info!("Registered {} at {}", agent.name(), agent.route());
        self.state.agents.push(Arc::new(agent));
        Ok(())
    }

    /// Get a reference to the session manager
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.state.sessions
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/sessions", get(sessions_handler))
            .route("/{agent}", get(agent_card_handler))
            .route("/{agent}/tools", get(list_tools_handler))
            .route("/{agent}/tools/{tool}", post(invoke_tool_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Start the server (blocks until shutdown)
    pub async fn run(self) -> Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(self.bind).await?;
        info!("Agent server listening on {}", self.bind);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

// ── Operational endpoints ──

async fn health_handler(State(state): State<ServerState>) -> Json<Value> {
    let agents: Vec<&str> = state.agents.iter().map(|a| a.short_name()).collect();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "agents": agents,
        "version": state.version,
    }))
}

async fn ready_handler() -> Json<Value> {
    Json(serde_json::json!({ "ready": true }))
}

async fn sessions_handler(State(state): State<ServerState>) -> Json<Vec<Session>> {
    Json(state.sessions.list().await)
}

// ── Agent endpoints ──

type HandlerError = (StatusCode, Json<ErrorBody>);

fn not_found(message: String) -> HandlerError {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(message)))
}

fn lookup_agent(state: &ServerState, segment: &str) -> Result<Arc<AgentDefinition>, HandlerError> {
    let route = format!("/{segment}");
    state
        .agent_by_route(&route)
        .cloned()
        .ok_or_else(|| not_found(format!("no agent registered at {route}")))
}

async fn agent_card_handler(
    State(state): State<ServerState>,
    Path(agent): Path<String>,
) -> Result<Json<AgentCard>, HandlerError> {
    let agent = lookup_agent(&state, &agent)?;
    Ok(Json(agent.card()))
}

async fn list_tools_handler(
    State(state): State<ServerState>,
    Path(agent): Path<String>,
) -> Result<Json<ToolListing>, HandlerError> {
    let agent = lookup_agent(&state, &agent)?;
    Ok(Json(ToolListing {
        agent: agent.name().to_string(),
        tools: agent.tools().definitions(),
    }))
}

async fn invoke_tool_handler(
    State(state): State<ServerState>,
    Path((agent, tool)): Path<(String, String)>,
    Json(req): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, HandlerError> {
    let agent = lookup_agent(&state, &agent)?;

    let result = match agent.tools().invoke(&tool, Value::Object(req.args)).await {
        Ok(result) => result,
        Err(err @ DispatchError::UnknownTool(_)) => {
            warn!("{} has no tool '{}'", agent.name(), tool);
            return Err(not_found(err.to_string()));
        }
    };

    if let Some(transfer) = &result.transfer
        && state.agent_by_route(&transfer.target_route).is_none()
    {
        warn!(
            "Transfer to {} requested but no agent is registered there",
            transfer.target_route
        );
    }

    let session = state.sessions.apply_result(&req.session_id, &result).await;
    debug!(
        "Session '{}' now owned by {}",
        session.id, session.current_route
    );

    Ok(Json(InvokeResponse::new(session.id, result)))
}
