//! Mock research agents
//!
//! Each agent is a pure function of a query string and a random source.
//! Nothing here touches the network or any shared state; the HTTP layer in
//! [`crate::api`] only decodes the query and serializes the payload.

pub mod canned;
pub mod evidence;
pub mod map;
pub mod result;
pub mod thinking;

pub use result::{
    AgentResponse, AgentResult, EvidenceResult, MapFormat, MapResult, Paper, Stance,
    ThinkingResult,
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query used when the request carries no `q` parameter (or an empty one)
pub const DEFAULT_QUERY: &str = "default";

/// The fixed set of research agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Research thesis and objectives
    Thesis,
    /// Literature search
    Search,
    /// Key findings summary
    Summarize,
    /// Research trends
    Trend,
    /// Testable hypotheses
    Hypothesis,
    /// Hypothesis feasibility assessment
    Evaluate,
    /// Research workflow diagram
    Map,
    /// Socratic questioning
    Thinking,
    /// Supporting and opposing papers
    Evidence,
}

impl AgentKind {
    /// Every known agent, in dashboard order
    pub const ALL: [AgentKind; 9] = [
        AgentKind::Thesis,
        AgentKind::Search,
        AgentKind::Summarize,
        AgentKind::Trend,
        AgentKind::Hypothesis,
        AgentKind::Evaluate,
        AgentKind::Map,
        AgentKind::Thinking,
        AgentKind::Evidence,
    ];

    /// Display name, also the key in the client-side status map
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::Thesis => "Thesis Agent",
            AgentKind::Search => "Search Agent",
            AgentKind::Summarize => "Summarize Agent",
            AgentKind::Trend => "Trend Agent",
            AgentKind::Hypothesis => "Hypothesis Agent",
            AgentKind::Evaluate => "Evaluate Agent",
            AgentKind::Map => "Map Agent",
            AgentKind::Thinking => "Thinking Agent",
            AgentKind::Evidence => "Evidence Agent",
        }
    }

    /// Short lowercase name used in the endpoint path
    pub fn slug(&self) -> &'static str {
        match self {
            AgentKind::Thesis => "thesis",
            AgentKind::Search => "search",
            AgentKind::Summarize => "summarize",
            AgentKind::Trend => "trend",
            AgentKind::Hypothesis => "hypothesis",
            AgentKind::Evaluate => "evaluate",
            AgentKind::Map => "map",
            AgentKind::Thinking => "thinking",
            AgentKind::Evidence => "evidence",
        }
    }

    /// HTTP path of the agent endpoint
    pub fn endpoint(&self) -> String {
        format!("/api/{}", self.slug())
    }

    /// One-line description shown under the agent card
    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Thesis => "Generate research thesis and objectives",
            AgentKind::Search => "Find relevant scientific literature",
            AgentKind::Summarize => "Summarize key findings and insights",
            AgentKind::Trend => "Identify research trends and patterns",
            AgentKind::Hypothesis => "Generate testable hypotheses",
            AgentKind::Evaluate => "Assess hypothesis validity and feasibility",
            AgentKind::Map => "Create research workflow visualization",
            AgentKind::Thinking => "Provide Socratic questioning for reflection",
            AgentKind::Evidence => "Find supporting and opposing evidence",
        }
    }

    /// Closed interval the reported confidence always lands in
    pub fn confidence_range(&self) -> (f64, f64) {
        match self {
            AgentKind::Thesis => (0.70, 0.95),
            AgentKind::Search => (0.75, 0.95),
            AgentKind::Summarize => (0.80, 0.95),
            AgentKind::Trend => (0.72, 0.95),
            AgentKind::Hypothesis => (0.68, 0.95),
            AgentKind::Evaluate => (0.74, 0.95),
            AgentKind::Map => (0.85, 0.95),
            AgentKind::Thinking => (0.78, 0.95),
            AgentKind::Evidence => (0.76, 0.95),
        }
    }

    /// Look up an agent by its endpoint slug
    pub fn from_slug(slug: &str) -> Option<AgentKind> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Draw a confidence score for this agent, rounded to 2 decimals
    pub fn sample_confidence<R: Rng>(&self, rng: &mut R) -> f64 {
        let (low, high) = self.confidence_range();
        result::round2(rng.gen_range(low..high))
    }

    /// Generate this agent's payload for `query`
    pub fn respond<R: Rng>(&self, query: &str, rng: &mut R) -> AgentResponse {
        match self {
            AgentKind::Evidence => AgentResponse::Evidence(evidence::generate(query, rng)),
            AgentKind::Map => AgentResponse::Map(map::generate(query, rng)),
            AgentKind::Thinking => AgentResponse::Thinking(thinking::generate(query, rng)),
            plain => AgentResponse::Base(canned::generate(*plain, query, rng)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resolve the effective query: absent or empty becomes [`DEFAULT_QUERY`]
pub fn effective_query(q: Option<&str>) -> &str {
    match q {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_QUERY,
    }
}

/// Pick one entry of a non-empty literal table
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    choices[rng.gen_range(0..choices.len())]
}

/// `Math.random() > threshold` style coin flip
pub(crate) fn chance_above<R: Rng>(rng: &mut R, threshold: f64) -> bool {
    rng.gen::<f64>() > threshold
}
