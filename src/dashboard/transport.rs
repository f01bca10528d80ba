//! Agent endpoint transport
//!
//! The invocation component talks to endpoints only through
//! [`AgentTransport`], so tests can swap the HTTP client for a stub.

use super::error::InvocationError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use theioptera_backend::agents::AgentKind;
use tracing::debug;

/// Fetches one agent endpoint for one query
#[async_trait]
pub trait AgentTransport: Send + Sync {
    /// GET `endpoint?q=query` and return the parsed JSON body
    ///
    /// Non-success statuses are errors; no retry is attempted.
    async fn fetch(&self, endpoint: &str, query: &str) -> Result<Value, InvocationError>;
}

/// HTTP transport against a running backend
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the backend at `base_url`
    ///
    /// `base_url` may carry a path prefix (`http://host/theioptera`); agent
    /// endpoints are resolved below it. No request timeout is configured: a
    /// hung request stays pending.
    pub fn new(base_url: &str) -> Result<Self, InvocationError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| InvocationError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl AgentTransport for HttpTransport {
    async fn fetch(&self, endpoint: &str, query: &str) -> Result<Value, InvocationError> {
        let url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| InvocationError::InvalidUrl(format!("{endpoint}: {e}")))?;

        debug!(url = %url, query = %query, "Fetching agent endpoint");
        let response = self.client.get(url).query(&[("q", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InvocationError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetch `kind` and decode the body as `T`
pub async fn fetch_agent<T: DeserializeOwned>(
    transport: &dyn AgentTransport,
    kind: AgentKind,
    query: &str,
) -> Result<T, InvocationError> {
    let value = transport.fetch(&kind.endpoint(), query).await?;
    Ok(serde_json::from_value(value)?)
}
