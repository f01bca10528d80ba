//! Agent catalog handlers
//!
//! Lets clients discover the known agents instead of hard-coding paths.

use crate::agents::AgentKind;
use crate::error::AppError;
use axum::{extract::Path, response::Json};
use serde::Serialize;

/// Catalog entry for one agent
#[derive(Debug, Serialize)]
pub struct AgentInfo {
    /// Display name (status-map key)
    pub name: &'static str,
    /// Path segment after `/api/`
    pub slug: &'static str,
    /// Full endpoint path
    pub endpoint: String,
    /// One-line description
    pub description: &'static str,
    /// Lowest confidence the agent reports
    pub confidence_min: f64,
    /// Highest confidence the agent reports
    pub confidence_max: f64,
}

impl From<AgentKind> for AgentInfo {
    fn from(kind: AgentKind) -> Self {
        let (confidence_min, confidence_max) = kind.confidence_range();
        Self {
            name: kind.display_name(),
            slug: kind.slug(),
            endpoint: kind.endpoint(),
            description: kind.description(),
            confidence_min,
            confidence_max,
        }
    }
}

/// Agents list response
#[derive(Debug, Serialize)]
pub struct AgentsListResponse {
    /// Every known agent, in dashboard order
    pub agents: Vec<AgentInfo>,
    /// Total number of agents
    pub count: usize,
}

/// GET /api/agents - List all agents
pub async fn list_agents() -> Json<AgentsListResponse> {
    let agents: Vec<AgentInfo> = AgentKind::ALL.into_iter().map(AgentInfo::from).collect();
    Json(AgentsListResponse {
        count: agents.len(),
        agents,
    })
}

/// GET /api/agents/:slug - Describe a single agent
pub async fn get_agent(Path(slug): Path<String>) -> Result<Json<AgentInfo>, AppError> {
    let kind = AgentKind::from_slug(&slug).ok_or(AppError::AgentNotFound(slug))?;
    Ok(Json(AgentInfo::from(kind)))
}
