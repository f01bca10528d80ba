//! Reflection journal
//!
//! Fetches Socratic questions for the current research question and stores
//! the researcher's free-text reflections on them.

use super::error::ReflectionError;
use super::transport::{fetch_agent, AgentTransport};
use crate::state::{Reflection, StateStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use theioptera_backend::agents::{AgentKind, ThinkingResult, DEFAULT_QUERY};
use tracing::info;

/// Socratic questions for the current question plus saved reflections
pub struct ReflectionJournal {
    transport: Arc<dyn AgentTransport>,
    store: StateStore,
    questions: Vec<String>,
}

impl ReflectionJournal {
    /// Journal with no questions fetched yet
    pub fn new(transport: Arc<dyn AgentTransport>, store: StateStore) -> Self {
        Self {
            transport,
            store,
            questions: Vec::new(),
        }
    }

    /// Questions from the last successful fetch
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Fetch a fresh set of Socratic questions
    ///
    /// On failure the previous questions are kept.
    pub async fn generate_questions(&mut self) -> Result<&[String], ReflectionError> {
        let question = self.store.current_question()?;
        let query = if question.is_empty() {
            DEFAULT_QUERY
        } else {
            question.as_str()
        };

        let result: ThinkingResult =
            fetch_agent(self.transport.as_ref(), AgentKind::Thinking, query).await?;
        self.questions = result.questions;
        Ok(&self.questions)
    }

    /// Save `text` against the current questions
    pub fn save(&self, text: &str) -> Result<Reflection, ReflectionError> {
        self.save_at(text, Utc::now())
    }

    /// Save `text` as written at `now`
    pub fn save_at(&self, text: &str, now: DateTime<Utc>) -> Result<Reflection, ReflectionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReflectionError::Empty);
        }

        let reflection = Reflection {
            id: now.timestamp_millis().to_string(),
            question: self.store.current_question()?,
            reflection: text.to_string(),
            timestamp: now,
            socratic_questions: self.questions.clone(),
        };
        self.store.add_reflection(reflection.clone())?;
        info!(id = %reflection.id, "Reflection saved");
        Ok(reflection)
    }
}
