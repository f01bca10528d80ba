//! Error types and error handling for the server
//!
//! Errors convert into HTTP responses through `IntoResponse`, so every
//! failure reaches the client as the same JSON shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Server-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The `q` query parameter could not be decoded
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// No agent is registered under the requested name
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::AgentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
