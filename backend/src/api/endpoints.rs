//! Mock agent endpoint handlers
//!
//! One handler serves all nine agents; the router binds it to each
//! agent's path with the agent kind captured.

use crate::agents::{effective_query, AgentKind, AgentResponse};
use crate::error::AppError;
use axum::extract::{rejection::QueryRejection, Query};
use axum::response::Json;
use serde::Deserialize;
use tracing::debug;

/// Query parameters accepted by every agent endpoint
#[derive(Debug, Deserialize)]
pub struct AgentQuery {
    /// Research question; absent or empty means `"default"`
    pub q: Option<String>,
}

/// Generate the payload for `kind` with the thread-local random source
fn generate(kind: AgentKind, query: &str) -> AgentResponse {
    kind.respond(query, &mut rand::thread_rng())
}

/// GET /api/{agent}?q=... - Run a mock agent
pub async fn run_agent(
    kind: AgentKind,
    query: Result<Query<AgentQuery>, QueryRejection>,
) -> Result<Json<AgentResponse>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    let query = effective_query(params.q.as_deref());

    let response = generate(kind, query);
    debug!(
        agent = kind.display_name(),
        query = %query,
        confidence = response.base().confidence,
        warnings = response.base().warnings.len(),
        "Generated mock agent response"
    );

    Ok(Json(response))
}
