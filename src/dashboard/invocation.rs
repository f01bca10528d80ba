//! Agent invocation component
//!
//! One [`AgentInvoker`] per agent card. It owns the card's transient state
//! (loading flag, last error, last payload) and mirrors each lifecycle step
//! into the store's status map, where the card reads its displayed status.

use super::error::InvocationError;
use super::transport::{fetch_agent, AgentTransport};
use crate::state::{AgentStatus, InvocationEvent, StateStore, StoreError};
use std::sync::Arc;
use theioptera_backend::agents::{AgentKind, AgentResult, DEFAULT_QUERY};
use tracing::{info, warn};

/// Transient per-card state, lost on restart
#[derive(Debug, Clone, Default)]
pub struct InvocationState {
    /// A request is in flight
    pub loading: bool,
    /// Message of the last failure, cleared on the next trigger
    pub error: Option<String>,
    /// Payload of the last success
    pub data: Option<AgentResult>,
}

/// Runs one agent and reports results upward
pub struct AgentInvoker {
    kind: AgentKind,
    transport: Arc<dyn AgentTransport>,
    store: StateStore,
    state: InvocationState,
}

impl AgentInvoker {
    /// Create an idle invoker for `kind`
    pub fn new(kind: AgentKind, transport: Arc<dyn AgentTransport>, store: StateStore) -> Self {
        Self {
            kind,
            transport,
            store,
            state: InvocationState::default(),
        }
    }

    /// Agent this invoker runs
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Transient card state
    pub fn state(&self) -> &InvocationState {
        &self.state
    }

    /// Status shown on the card, read from the store
    pub fn displayed_status(&self) -> Result<AgentStatus, StoreError> {
        Ok(self.store.agent_status()?.get(self.kind))
    }

    fn record(&self, event: InvocationEvent) -> Result<AgentStatus, StoreError> {
        let status = self.displayed_status()?.transition(event);
        self.store.set_agent_status(self.kind, status)?;
        Ok(status)
    }

    /// Run the agent against the current question
    ///
    /// On success the status becomes `completed`, the payload is kept and
    /// `on_result` receives it. On failure the status becomes `error`, the
    /// message is kept and `on_result` is not called. Store failures are
    /// the only errors returned; they are also kept as the card's error.
    pub async fn run<F>(&mut self, on_result: F) -> Result<AgentStatus, StoreError>
    where
        F: FnOnce(AgentResult),
    {
        self.state.loading = true;
        self.state.error = None;

        let outcome = self.attempt(on_result).await;
        self.state.loading = false;

        if let Err(e) = &outcome {
            warn!(agent = self.kind.display_name(), error = %e, "Agent status not persisted");
            self.state.error = Some(e.to_string());
        }
        outcome
    }

    async fn attempt<F>(&mut self, on_result: F) -> Result<AgentStatus, StoreError>
    where
        F: FnOnce(AgentResult),
    {
        self.record(InvocationEvent::Triggered)?;

        let question = self.store.current_question()?;
        let query = if question.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            question
        };

        match fetch_agent::<AgentResult>(self.transport.as_ref(), self.kind, &query).await {
            Ok(result) => {
                let status = self.record(InvocationEvent::Succeeded)?;
                info!(
                    agent = self.kind.display_name(),
                    confidence = result.confidence,
                    "Agent completed"
                );
                self.state.data = Some(result.clone());
                on_result(result);
                Ok(status)
            }
            Err(InvocationError::Store(e)) => Err(e),
            Err(e) => {
                warn!(agent = self.kind.display_name(), error = %e, "Agent failed");
                self.state.error = Some(e.to_string());
                self.record(InvocationEvent::Failed)
            }
        }
    }
}
