//! Session browser
//!
//! Lists saved sessions and lets the user compare, reload or delete them.

use super::error::SessionError;
use super::prompt::Prompt;
use crate::state::{Session, StateStore};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use tracing::info;

/// One row of a side-by-side comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Name the session was saved under
    pub project_name: String,
    /// Research question at save time
    pub question: String,
    /// Average confidence, 0.0 to 1.0
    pub score: f64,
    /// Number of agent results in the session
    pub agent_count: usize,
    /// When the session was saved
    pub timestamp: DateTime<Utc>,
}

impl From<&Session> for ComparisonRow {
    fn from(session: &Session) -> Self {
        Self {
            project_name: session.project_name.clone(),
            question: session.question.clone(),
            score: session.score,
            agent_count: session.agents.len(),
            timestamp: session.timestamp,
        }
    }
}

/// Saved-session list with a multi-selection
pub struct SessionBrowser {
    store: StateStore,
    sessions: Vec<Session>,
    selected: BTreeSet<String>,
}

impl SessionBrowser {
    /// Load the saved sessions from `store`
    pub fn open(store: StateStore) -> Result<Self, SessionError> {
        let sessions = store.sessions()?;
        Ok(Self {
            store,
            sessions,
            selected: BTreeSet::new(),
        })
    }

    /// Sessions, newest first
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Toggle selection of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            return false;
        }
        if self.sessions.iter().any(|s| s.id == id) {
            self.selected.insert(id.to_string());
            return true;
        }
        false
    }

    /// Whether `id` is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected sessions
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Comparison rows for the selected sessions, in list order
    pub fn compare(&self) -> Result<Vec<ComparisonRow>, SessionError> {
        if self.selected.len() < 2 {
            return Err(SessionError::NotEnoughSelected);
        }
        Ok(self
            .sessions
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .map(ComparisonRow::from)
            .collect())
    }

    /// Delete `id` after confirmation; returns whether it was deleted
    pub fn delete(&mut self, id: &str, prompt: &mut dyn Prompt) -> Result<bool, SessionError> {
        if !prompt.confirm("Are you sure you want to delete this session?") {
            return Ok(false);
        }
        let removed = self.store.delete_session(id)?;
        self.sessions.retain(|s| s.id != id);
        self.selected.remove(id);
        if removed {
            info!(session_id = id, "Session deleted");
        }
        Ok(removed)
    }

    /// Make the question of `id` current after confirmation
    ///
    /// Returns the loaded question, or `None` when cancelled or unknown.
    pub fn load(&self, id: &str, prompt: &mut dyn Prompt) -> Result<Option<String>, SessionError> {
        let Some(session) = self.sessions.iter().find(|s| s.id == id) else {
            return Ok(None);
        };
        let message = format!(
            "Load session \"{}\"? This will set the research question to: \"{}\"",
            session.project_name, session.question
        );
        if !prompt.confirm(&message) {
            return Ok(None);
        }
        self.store.set_current_question(&session.question)?;
        info!(session_id = id, "Session loaded");
        Ok(Some(session.question.clone()))
    }
}
