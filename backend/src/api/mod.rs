//! API module
//!
//! Contains HTTP request handlers and the route table for the mock agent
//! server.

pub mod catalog;
pub mod endpoints;

use crate::agents::AgentKind;
use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Json,
    routing::get,
    Router,
};
use endpoints::AgentQuery;
use serde::Serialize;

/// Greeting returned by `GET /`
#[derive(Serialize)]
pub struct HelloResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator
    pub status: String,
}

/// Health report returned by `GET /api/health`
#[derive(Serialize)]
pub struct HealthResponse {
    /// Health indicator
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET / - Hello
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Theioptera Backend!".to_string(),
        status: "ok".to_string(),
    })
}

/// GET /api/health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}

/// Build the route table without middleware
///
/// Every agent in [`AgentKind::ALL`] gets `GET /api/<slug>`.
pub fn router() -> Router {
    let mut router = Router::new()
        .route("/", get(hello_world))
        .route("/api/health", get(health_check))
        .route("/api/agents", get(catalog::list_agents))
        .route("/api/agents/:slug", get(catalog::get_agent));

    for kind in AgentKind::ALL {
        router = router.route(
            &kind.endpoint(),
            get(move |query: Result<Query<AgentQuery>, QueryRejection>| {
                endpoints::run_agent(kind, query)
            }),
        );
    }

    router
}
