//! Session aggregator
//!
//! Collects the results reported by agent cards and, on request, saves them
//! as one named session.

use super::error::SessionError;
use super::prompt::Prompt;
use crate::state::{Session, StateStore};
use chrono::{DateTime, Utc};
use theioptera_backend::agents::result::round2;
use theioptera_backend::agents::AgentResult;
use tracing::info;

/// Message shown when asking for the project name
pub const PROJECT_NAME_PROMPT: &str = "Enter a name for this research session:";

/// Live summary shown above the agent cards
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSummary {
    /// Number of collected results
    pub completed: usize,
    /// Mean confidence as a whole percentage
    pub average_percent: u32,
}

/// Mean confidence rounded to 2 decimals; `None` when `results` is empty
pub fn mean_confidence(results: &[AgentResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let sum: f64 = results.iter().map(|r| r.confidence).sum();
    Some(round2(sum / results.len() as f64))
}

/// Time-derived session id, bumped forward until it is unused
pub fn session_id(now: DateTime<Utc>, existing: &[Session]) -> String {
    let mut millis = now.timestamp_millis();
    while existing.iter().any(|s| s.id == millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}

/// Results collected from agent cards since the dashboard opened
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    results: Vec<AgentResult>,
}

impl SessionAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result; one with the same `input_used` is replaced in place
    pub fn record(&mut self, result: AgentResult) {
        match self
            .results
            .iter_mut()
            .find(|existing| existing.input_used == result.input_used)
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }

    /// Collected results, in first-seen order
    pub fn results(&self) -> &[AgentResult] {
        &self.results
    }

    /// Number of collected results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Summary for display; `None` until something is collected
    pub fn summary(&self) -> Option<ResultsSummary> {
        if self.results.is_empty() {
            return None;
        }
        let sum: f64 = self.results.iter().map(|r| r.confidence).sum();
        Some(ResultsSummary {
            completed: self.results.len(),
            average_percent: (sum / self.results.len() as f64 * 100.0).round() as u32,
        })
    }

    /// Save the collected results as a session, stamped with the current time
    pub fn save(
        &self,
        store: &StateStore,
        prompt: &mut dyn Prompt,
    ) -> Result<Session, SessionError> {
        self.save_at(store, prompt, Utc::now())
    }

    /// Save the collected results as a session created at `now`
    ///
    /// Fails before prompting when nothing was collected; aborts without
    /// touching the store when the project name is blank or cancelled.
    pub fn save_at(
        &self,
        store: &StateStore,
        prompt: &mut dyn Prompt,
        now: DateTime<Utc>,
    ) -> Result<Session, SessionError> {
        let score = mean_confidence(&self.results).ok_or(SessionError::NoResults)?;

        let project_name = prompt
            .ask(PROJECT_NAME_PROMPT)
            .filter(|name| !name.is_empty())
            .ok_or(SessionError::MissingProjectName)?;

        let existing = store.sessions()?;
        let session = Session {
            id: session_id(now, &existing),
            project_name,
            question: store.current_question()?,
            score,
            timestamp: now,
            agents: self.results.clone(),
        };

        store.add_session(session.clone())?;
        info!(
            session_id = %session.id,
            project = %session.project_name,
            agents = session.agents.len(),
            score = session.score,
            "Session saved"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Replays fixed answers.
    struct Scripted(Vec<Option<String>>);

    impl Prompt for Scripted {
        fn ask(&mut self, _message: &str) -> Option<String> {
            if self.0.is_empty() {
                panic!("unexpected prompt");
            }
            self.0.remove(0)
        }

        fn confirm(&mut self, _message: &str) -> bool {
            true
        }
    }

    fn answer(name: &str) -> Scripted {
        Scripted(vec![Some(name.to_string())])
    }

    fn result(input: &str, confidence: f64) -> AgentResult {
        AgentResult {
            result: format!("r {input}"),
            input_used: input.to_string(),
            confidence,
            warnings: vec![],
            sources: vec![],
        }
    }

    #[test]
    fn test_record_dedupes_by_input() {
        let mut aggregator = SessionAggregator::new();
        aggregator.record(result("a", 0.7));
        aggregator.record(result("b", 0.8));
        aggregator.record(result("a", 0.9));

        assert_eq!(aggregator.len(), 2);
        assert_eq!(aggregator.results()[0].confidence, 0.9);
        assert_eq!(aggregator.results()[1].input_used, "b");
    }

    #[test]
    fn test_identical_inputs_keep_only_the_later_result() {
        let store = StateStore::in_memory();
        let mut aggregator = SessionAggregator::new();
        aggregator.record(result("default", 0.72));
        aggregator.record(result("default", 0.88));

        let session = aggregator.save(&store, &mut answer("Dup")).unwrap();
        assert_eq!(session.agents.len(), 1);
        assert_eq!(session.agents[0].confidence, 0.88);
        assert_eq!(session.score, 0.88);
    }

    #[test]
    fn test_score_is_rounded_mean() {
        let store = StateStore::in_memory();
        let mut aggregator = SessionAggregator::new();
        aggregator.record(result("a", 0.71));
        aggregator.record(result("b", 0.84));
        aggregator.record(result("c", 0.93));

        let session = aggregator.save(&store, &mut answer("Mean")).unwrap();
        assert_eq!(session.score, 0.83);
        assert_eq!(store.sessions().unwrap()[0], session);
    }

    #[test]
    fn test_save_without_results_is_rejected_before_prompting() {
        let store = StateStore::in_memory();
        let aggregator = SessionAggregator::new();

        let err = aggregator.save(&store, &mut Scripted(vec![])).unwrap_err();
        assert!(matches!(err, SessionError::NoResults));
        assert!(store.sessions().unwrap().is_empty());
    }

    #[test]
    fn test_blank_or_cancelled_name_aborts() {
        let store = StateStore::in_memory();
        let mut aggregator = SessionAggregator::new();
        aggregator.record(result("a", 0.8));

        for answers in [vec![None], vec![Some(String::new())]] {
            let err = aggregator.save(&store, &mut Scripted(answers)).unwrap_err();
            assert!(matches!(err, SessionError::MissingProjectName));
        }
        assert!(store.sessions().unwrap().is_empty());
    }

    #[test]
    fn test_session_carries_question_and_time_id() {
        let store = StateStore::in_memory();
        store.set_current_question("BDNF and exercise").unwrap();
        let mut aggregator = SessionAggregator::new();
        aggregator.record(result("BDNF and exercise", 0.8));

        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let first = aggregator.save_at(&store, &mut answer("One"), now).unwrap();
        let second = aggregator.save_at(&store, &mut answer("Two"), now).unwrap();

        assert_eq!(first.id, "1700000000123");
        assert_eq!(second.id, "1700000000124");
        assert_eq!(first.question, "BDNF and exercise");

        let names: Vec<String> = store
            .sessions()
            .unwrap()
            .into_iter()
            .map(|s| s.project_name)
            .collect();
        assert_eq!(names, vec!["Two", "One"]);
    }

    #[test]
    fn test_summary() {
        let mut aggregator = SessionAggregator::new();
        assert!(aggregator.summary().is_none());

        aggregator.record(result("a", 0.75));
        aggregator.record(result("b", 0.9));
        assert_eq!(
            aggregator.summary(),
            Some(ResultsSummary {
                completed: 2,
                average_percent: 83,
            })
        );
    }

    #[test]
    fn test_mean_confidence_empty() {
        assert_eq!(mean_confidence(&[]), None);
    }
}
