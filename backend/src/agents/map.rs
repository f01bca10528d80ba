//! Map agent: Mermaid research workflow diagram

use super::{AgentKind, AgentResult, MapFormat, MapResult};
use rand::Rng;

/// Queries longer than this are truncated in the diagram's root node
const LABEL_MAX_CHARS: usize = 30;

/// Queries longer than this get a complexity warning
const LONG_QUERY_CHARS: usize = 100;

fn root_label(query: &str) -> String {
    if query.chars().count() > LABEL_MAX_CHARS {
        let head: String = query.chars().take(LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        query.to_string()
    }
}

/// Build the Mermaid source for `query`
pub fn diagram(query: &str) -> String {
    format!(
        "graph TD
    A[Research Question: {}] --> B[Literature Search]
    B --> C[Key Papers Identified]
    C --> D[Thesis Generation]
    C --> E[Trend Analysis]
    D --> F[Hypothesis Formation]
    E --> F
    F --> G[Evidence Collection]
    G --> H[Supporting Papers]
    G --> I[Opposing Papers]
    H --> J[Evaluation & Scoring]
    I --> J
    J --> K[Research Recommendations]
    K --> L[Next Steps & Implementation]

    style A fill:#e1f5fe
    style F fill:#f3e5f5
    style J fill:#e8f5e8
    style L fill:#fff3e0",
        root_label(query)
    )
}

/// Generate the map payload for `query`
pub fn generate<R: Rng>(query: &str, rng: &mut R) -> MapResult {
    let confidence = AgentKind::Map.sample_confidence(rng);

    let mut warnings = Vec::new();
    if query.chars().count() > LONG_QUERY_CHARS {
        warnings.push("Long research questions may result in complex workflow maps".to_string());
    }

    MapResult {
        map: diagram(query),
        format: MapFormat::Mermaid,
        base: AgentResult {
            result: format!(
                "Generated research workflow map for \"{query}\". The diagram shows the complete research pipeline from initial question to final recommendations, including parallel paths for thesis development and trend analysis."
            ),
            input_used: query.to_string(),
            confidence,
            warnings,
            sources: vec![
                "Research methodology frameworks".to_string(),
                "Scientific workflow standards".to_string(),
                "Evidence-based research protocols".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_short_query_label() {
        let map = generate("CAR-T persistence", &mut StepRng::new(0, 0));
        assert_eq!(map.format, MapFormat::Mermaid);
        assert!(map.map.starts_with("graph TD"));
        assert!(map
            .map
            .contains("A[Research Question: CAR-T persistence] --> B[Literature Search]"));
        assert!(map.base.warnings.is_empty());
        assert_eq!(map.base.confidence, 0.85);
    }

    #[test]
    fn test_long_query_is_truncated_in_label() {
        let query = "a".repeat(40);
        let map = generate(&query, &mut StepRng::new(0, 0));
        let expected = format!("A[Research Question: {}...]", "a".repeat(30));
        assert!(map.map.contains(&expected));
        assert!(map.base.result.contains(&query));
    }

    #[test]
    fn test_very_long_query_warns() {
        let query = "x".repeat(101);
        let map = generate(&query, &mut StepRng::new(0, 0));
        assert_eq!(map.base.warnings.len(), 1);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let query = "é".repeat(31);
        assert_eq!(root_label(&query).chars().count(), 33);
    }
}
