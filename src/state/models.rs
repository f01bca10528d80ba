// Persisted data model
// Profile, sessions, agent status map and reflections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use theioptera_backend::agents::{AgentKind, AgentResult};

/// Researcher profile, one per store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Full name (required)
    pub name: String,
    /// Email address (required)
    pub email: String,
    /// Primary research field
    pub field: String,
    /// Institution or organization
    pub institution: String,
}

/// Saved bundle of agent results under a project name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique id derived from the creation time (milliseconds since epoch)
    pub id: String,
    /// User-chosen project name
    pub project_name: String,
    /// Research question the agents ran against
    pub question: String,
    /// Mean confidence of `agents`, rounded to 2 decimals
    pub score: f64,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Included results, in collection order
    pub agents: Vec<AgentResult>,
}

/// Free-text reflection written against a set of Socratic questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Unique id derived from the creation time
    pub id: String,
    /// Research question at the time of writing
    pub question: String,
    /// Trimmed reflection text
    pub reflection: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Questions shown while writing
    pub socratic_questions: Vec<String>,
}

/// Agent status enumeration
/// Represents the lifecycle state of the latest invocation of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Never run
    #[default]
    Idle,
    /// Request in flight
    Pending,
    /// Last request succeeded
    Completed,
    /// Last request failed
    Error,
}

/// Lifecycle events of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationEvent {
    /// User triggered a run
    Triggered,
    /// Response arrived and parsed
    Succeeded,
    /// Transport failure, non-success status or malformed payload
    Failed,
}

impl AgentStatus {
    /// Next status after `event`
    ///
    /// A trigger is accepted from every state, including `Pending`: there is
    /// no cancellation, so a second run races the first and the last
    /// response to arrive decides the final status. An outcome that arrives
    /// while `Idle` was never triggered and leaves the agent idle.
    pub fn transition(self, event: InvocationEvent) -> AgentStatus {
        match (self, event) {
            (_, InvocationEvent::Triggered) => AgentStatus::Pending,
            (AgentStatus::Idle, _) => AgentStatus::Idle,
            (_, InvocationEvent::Succeeded) => AgentStatus::Completed,
            (_, InvocationEvent::Failed) => AgentStatus::Error,
        }
    }

    /// Whether a request is in flight
    pub fn is_pending(self) -> bool {
        self == AgentStatus::Pending
    }

    /// Lowercase name, as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Pending => "pending",
            AgentStatus::Completed => "completed",
            AgentStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent display name -> status
///
/// Always holds every known agent; names the store does not know about are
/// kept as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentStatusMap(BTreeMap<String, AgentStatus>);

impl Default for AgentStatusMap {
    fn default() -> Self {
        Self(
            AgentKind::ALL
                .iter()
                .map(|kind| (kind.display_name().to_string(), AgentStatus::Idle))
                .collect(),
        )
    }
}

impl AgentStatusMap {
    /// Fill in any known agent missing from a persisted map
    pub fn with_known_agents(mut self) -> Self {
        for kind in AgentKind::ALL {
            self.0
                .entry(kind.display_name().to_string())
                .or_insert(AgentStatus::Idle);
        }
        self
    }

    /// Status of `kind` (idle when absent)
    pub fn get(&self, kind: AgentKind) -> AgentStatus {
        self.0
            .get(kind.display_name())
            .copied()
            .unwrap_or_default()
    }

    /// Set the status of `kind`, leaving every other entry untouched
    pub fn set(&mut self, kind: AgentKind, status: AgentStatus) {
        self.0.insert(kind.display_name().to_string(), status);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, AgentStatus)> {
        self.0.iter().map(|(name, status)| (name.as_str(), *status))
    }
}
