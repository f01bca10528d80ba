//! Evidence explorer
//!
//! Fetches supporting and opposing papers for the current research question
//! and weighs them against each other.

use super::error::EvidenceError;
use super::transport::{fetch_agent, AgentTransport};
use crate::state::StateStore;
use std::sync::Arc;
use theioptera_backend::agents::{AgentKind, EvidenceResult};
use tracing::info;

/// Which side the papers lean towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// More supporting than opposing papers
    StrongSupport,
    /// More opposing than supporting papers
    StrongOpposition,
    /// As many papers on each side
    Balanced,
}

impl Verdict {
    /// Icon shown next to the balance
    pub fn icon(self) -> &'static str {
        match self {
            Verdict::StrongSupport => "✅",
            Verdict::StrongOpposition => "⚠️",
            Verdict::Balanced => "⚖️",
        }
    }
}

/// Counts and verdict of one analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceSummary {
    /// Number of supporting papers
    pub supporting: usize,
    /// Number of opposing papers
    pub opposing: usize,
    /// Overall lean
    pub verdict: Verdict,
}

impl EvidenceSummary {
    /// Summarize `evidence`
    pub fn of(evidence: &EvidenceResult) -> Self {
        let supporting = evidence.supporting.len();
        let opposing = evidence.opposing.len();
        let verdict = match supporting.cmp(&opposing) {
            std::cmp::Ordering::Greater => Verdict::StrongSupport,
            std::cmp::Ordering::Less => Verdict::StrongOpposition,
            std::cmp::Ordering::Equal => Verdict::Balanced,
        };
        Self {
            supporting,
            opposing,
            verdict,
        }
    }

    /// Papers on both sides
    pub fn total(&self) -> usize {
        self.supporting + self.opposing
    }

    /// One-paragraph interpretation of the verdict
    pub fn interpretation(&self) -> String {
        match self.verdict {
            Verdict::StrongSupport => format!(
                "Strong Support: The evidence heavily favors your hypothesis with {} supporting papers vs {} opposing.",
                self.supporting, self.opposing
            ),
            Verdict::StrongOpposition => format!(
                "Strong Opposition: The evidence suggests challenges to your hypothesis with {} opposing papers vs {} supporting.",
                self.opposing, self.supporting
            ),
            Verdict::Balanced if self.total() == 0 => {
                "No Evidence Found: Consider broadening your search terms or exploring related research areas.".to_string()
            }
            Verdict::Balanced => {
                "Balanced Evidence: The research shows equal support and opposition. Consider refining your hypothesis or exploring specific conditions.".to_string()
            }
        }
    }
}

/// Evidence page state
pub struct EvidenceExplorer {
    transport: Arc<dyn AgentTransport>,
    store: StateStore,
    evidence: Option<EvidenceResult>,
}

impl EvidenceExplorer {
    /// Create an explorer with no analysis yet
    pub fn new(transport: Arc<dyn AgentTransport>, store: StateStore) -> Self {
        Self {
            transport,
            store,
            evidence: None,
        }
    }

    /// Payload of the last successful analysis
    pub fn evidence(&self) -> Option<&EvidenceResult> {
        self.evidence.as_ref()
    }

    /// Fetch evidence for the current question
    ///
    /// Refuses to run without a question. On failure the previous analysis
    /// is kept.
    pub async fn analyze(&mut self) -> Result<EvidenceSummary, EvidenceError> {
        let question = self.store.current_question()?;
        if question.is_empty() {
            return Err(EvidenceError::MissingQuestion);
        }

        let evidence: EvidenceResult =
            fetch_agent(self.transport.as_ref(), AgentKind::Evidence, &question).await?;
        let summary = EvidenceSummary::of(&evidence);
        info!(
            supporting = summary.supporting,
            opposing = summary.opposing,
            verdict = ?summary.verdict,
            "Evidence analyzed"
        );
        self.evidence = Some(evidence);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::error::InvocationError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use theioptera_backend::agents::{AgentResult, Paper, Stance};

    fn paper(title: &str, stance: Stance) -> Paper {
        Paper {
            title: title.to_string(),
            stance,
            score: 0.85,
            authors: None,
            year: Some(2023),
            doi: None,
        }
    }

    fn evidence(supporting: usize, opposing: usize) -> EvidenceResult {
        EvidenceResult {
            supporting: (0..supporting)
                .map(|i| paper(&format!("S{i}"), Stance::Support))
                .collect(),
            opposing: (0..opposing)
                .map(|i| paper(&format!("O{i}"), Stance::Oppose))
                .collect(),
            base: AgentResult {
                result: "r".to_string(),
                input_used: "q".to_string(),
                confidence: 0.8,
                warnings: vec![],
                sources: vec![],
            },
        }
    }

    #[test]
    fn test_more_supporting_is_strong_support() {
        let summary = EvidenceSummary::of(&evidence(3, 1));
        assert_eq!(summary.verdict, Verdict::StrongSupport);
        assert_eq!(summary.total(), 4);
        assert!(summary
            .interpretation()
            .starts_with("Strong Support: The evidence heavily favors your hypothesis with 3 supporting"));
    }

    #[test]
    fn test_more_opposing_is_strong_opposition() {
        let summary = EvidenceSummary::of(&evidence(1, 2));
        assert_eq!(summary.verdict, Verdict::StrongOpposition);
        assert_eq!(summary.verdict.icon(), "⚠️");
        assert!(summary.interpretation().contains("2 opposing papers vs 1 supporting"));
    }

    #[test]
    fn test_equal_counts_are_balanced() {
        let summary = EvidenceSummary::of(&evidence(2, 2));
        assert_eq!(summary.verdict, Verdict::Balanced);
        assert!(summary.interpretation().starts_with("Balanced Evidence"));

        let empty = EvidenceSummary::of(&evidence(0, 0));
        assert_eq!(empty.verdict, Verdict::Balanced);
        assert!(empty.interpretation().starts_with("No Evidence Found"));
    }

    struct Fixed(Value);

    #[async_trait]
    impl AgentTransport for Fixed {
        async fn fetch(&self, endpoint: &str, _query: &str) -> Result<Value, InvocationError> {
            assert_eq!(endpoint, "/api/evidence");
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_analyze_requires_question() {
        let payload = serde_json::to_value(evidence(1, 1)).unwrap();
        let mut explorer =
            EvidenceExplorer::new(Arc::new(Fixed(payload)), StateStore::in_memory());
        assert!(matches!(
            explorer.analyze().await,
            Err(EvidenceError::MissingQuestion)
        ));
        assert!(explorer.evidence().is_none());
    }

    #[tokio::test]
    async fn test_analyze_keeps_papers() {
        let store = StateStore::in_memory();
        store.set_current_question("statins and dementia").unwrap();
        let payload = json!({
            "result": "Evidence analysis for \"statins and dementia\"",
            "input_used": "statins and dementia",
            "confidence": 0.81,
            "warnings": [],
            "sources": ["PubMed"],
            "supporting": [
                {"title": "A", "stance": "support", "score": 0.9, "year": 2022},
                {"title": "B", "stance": "support", "score": 0.7}
            ],
            "opposing": [
                {"title": "C", "stance": "oppose", "score": 0.6, "authors": "Lee et al."}
            ]
        });
        let mut explorer = EvidenceExplorer::new(Arc::new(Fixed(payload)), store);

        let summary = explorer.analyze().await.unwrap();
        assert_eq!(summary.verdict, Verdict::StrongSupport);
        let evidence = explorer.evidence().unwrap();
        assert_eq!(evidence.opposing[0].authors.as_deref(), Some("Lee et al."));
        assert_eq!(evidence.supporting[0].year, Some(2022));
    }
}
