//! Response payloads returned by the agent endpoints
//!
//! Every payload carries the common [`AgentResult`] fields at the top level;
//! the evidence, map and thinking agents add their own fields alongside.

use serde::{Deserialize, Serialize};

/// Common result shape shared by every agent endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    /// Human-readable result text (always embeds the query)
    pub result: String,
    /// Query the result was generated for
    pub input_used: String,
    /// Simulated certainty in `[0, 1]`, rounded to 2 decimals
    pub confidence: f64,
    /// Caveats attached to the result (possibly empty)
    pub warnings: Vec<String>,
    /// Cited sources (possibly empty)
    pub sources: Vec<String>,
}

/// Position a paper takes relative to the research question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Paper supports the research direction
    Support,
    /// Paper argues against the research direction
    Oppose,
}

/// A (fictional) paper reported by the evidence agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title
    pub title: String,
    /// Whether the paper supports or opposes
    pub stance: Stance,
    /// Relevance score in `[0, 1]`
    pub score: f64,
    /// Author line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    /// Publication year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Digital object identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// Evidence agent payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceResult {
    /// Papers supporting the research direction
    pub supporting: Vec<Paper>,
    /// Papers opposing the research direction
    pub opposing: Vec<Paper>,
    /// Common result fields
    #[serde(flatten)]
    pub base: AgentResult,
}

/// Diagram source format of a map payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    /// Mermaid flowchart source
    Mermaid,
}

/// Map agent payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResult {
    /// Diagram source
    pub map: String,
    /// Format of `map`
    pub format: MapFormat,
    /// Common result fields
    #[serde(flatten)]
    pub base: AgentResult,
}

/// Thinking agent payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkingResult {
    /// Socratic questions about the query
    pub questions: Vec<String>,
    /// Common result fields
    #[serde(flatten)]
    pub base: AgentResult,
}

/// Any agent payload, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentResponse {
    /// Plain result (thesis, search, summarize, trend, hypothesis, evaluate)
    Base(AgentResult),
    /// Evidence payload
    Evidence(EvidenceResult),
    /// Workflow map payload
    Map(MapResult),
    /// Socratic questions payload
    Thinking(ThinkingResult),
}

impl AgentResponse {
    /// Common result fields of any payload
    pub fn base(&self) -> &AgentResult {
        match self {
            AgentResponse::Base(base) => base,
            AgentResponse::Evidence(evidence) => &evidence.base,
            AgentResponse::Map(map) => &map.base,
            AgentResponse::Thinking(thinking) => &thinking.base,
        }
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> AgentResult {
        AgentResult {
            result: "Result for \"x\"".to_string(),
            input_used: "x".to_string(),
            confidence: 0.8,
            warnings: vec![],
            sources: vec!["PubMed".to_string()],
        }
    }

    #[test]
    fn test_evidence_serializes_flat() {
        let evidence = EvidenceResult {
            supporting: vec![],
            opposing: vec![Paper {
                title: "Challenges".to_string(),
                stance: Stance::Oppose,
                score: 0.9,
                authors: None,
                year: Some(2023),
                doi: None,
            }],
            base: base(),
        };

        let value = serde_json::to_value(AgentResponse::Evidence(evidence)).unwrap();
        assert_eq!(value["input_used"], json!("x"));
        assert_eq!(value["opposing"][0]["stance"], json!("oppose"));
        assert!(value["opposing"][0].get("authors").is_none());
        assert!(value.get("base").is_none());
    }

    #[test]
    fn test_extended_payload_reads_as_base() {
        let map = MapResult {
            map: "graph TD".to_string(),
            format: MapFormat::Mermaid,
            base: base(),
        };
        let json = serde_json::to_string(&AgentResponse::Map(map)).unwrap();
        assert!(json.contains("\"format\":\"mermaid\""));

        let parsed: AgentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, base());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.8449), 0.84);
        assert_eq!(round2(0.845_1), 0.85);
        assert_eq!(round2(0.7), 0.7);
    }
}
