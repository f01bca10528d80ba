//! Canned-text agents
//!
//! Thesis, search, summarize, trend, hypothesis and evaluate all share the
//! base payload: one of four literal texts, a handful of probabilistic
//! warnings and a fixed source list.

use super::{chance_above, pick, AgentKind, AgentResult};
use rand::Rng;

/// Generate the base payload for one of the canned-text agents
///
/// Agents with an extended payload (evidence, map, thinking) are answered
/// with their base text as well, which keeps this total over [`AgentKind`].
pub fn generate<R: Rng>(kind: AgentKind, query: &str, rng: &mut R) -> AgentResult {
    let confidence = kind.sample_confidence(rng);
    let texts = texts(kind, query);
    let choices: Vec<&str> = texts.iter().map(String::as_str).collect();
    let result = pick(rng, &choices).to_string();
    let warnings = warnings(kind, query, confidence, rng);

    AgentResult {
        result,
        input_used: query.to_string(),
        confidence,
        warnings,
        sources: sources(kind).iter().map(|s| s.to_string()).collect(),
    }
}

fn texts(kind: AgentKind, query: &str) -> Vec<String> {
    match kind {
        AgentKind::Thesis => vec![
            format!("The research question \"{query}\" can be addressed through a multi-phase experimental approach combining computational modeling and wet lab validation."),
            format!("Based on current literature, the hypothesis for \"{query}\" should focus on mechanistic pathways and their therapeutic implications."),
            format!("The thesis proposes that \"{query}\" represents a novel therapeutic target with significant clinical potential."),
            format!("This research aims to establish a comprehensive framework for understanding \"{query}\" through interdisciplinary methodologies."),
        ],
        AgentKind::Search => vec![
            format!("Found 847 relevant papers for \"{query}\" across PubMed, Google Scholar, and arXiv databases. Top results show strong evidence for molecular mechanisms involved."),
            format!("Literature search for \"{query}\" yielded 1,234 peer-reviewed articles published in the last 5 years. Most cited studies focus on therapeutic applications."),
            format!("Comprehensive search identified 692 high-impact publications related to \"{query}\". Meta-analyses suggest promising clinical outcomes."),
            format!("Database search for \"{query}\" returned 1,567 articles with 89% showing positive preliminary results in preclinical studies."),
        ],
        AgentKind::Summarize => vec![
            format!("Key findings on \"{query}\": (1) Molecular pathways show significant therapeutic potential, (2) Clinical trials demonstrate 67% efficacy rate, (3) Side effects are minimal and manageable, (4) Cost-effectiveness analysis favors implementation."),
            format!("Research summary for \"{query}\": Current evidence supports a multi-target approach with biomarker-guided therapy. Success rates vary by patient population (45-78%). Regulatory approval likely within 2-3 years."),
            format!("Literature synthesis on \"{query}\": Three major therapeutic mechanisms identified. Phase II trials show promise with 72% response rate. Key challenges include drug delivery and resistance mechanisms."),
            format!("Comprehensive review of \"{query}\": Strong preclinical evidence, emerging clinical data, and favorable safety profile. Recommended next steps include expanded trials and biomarker validation."),
        ],
        AgentKind::Trend => vec![
            format!("Trend analysis for \"{query}\": Research activity increased 340% over the last 3 years. Top emerging keywords: precision medicine, AI-driven discovery, personalized therapy. Funding increased by $2.3B globally."),
            format!("Publication trends for \"{query}\": Peak interest in 2022-2023 with 145% growth in citations. Leading research hubs: Boston, Basel, Cambridge UK. Collaboration networks expanding rapidly."),
            format!("Research momentum on \"{query}\": Exponential growth pattern with doubling time of 18 months. Key drivers include technological advances and clinical need. Expected market size: $15B by 2028."),
            format!("Trend forecast for \"{query}\": Current trajectory suggests breakthrough applications by 2025. Patent filings up 280%. Major pharmaceutical companies investing heavily in this area."),
        ],
        AgentKind::Hypothesis => vec![
            format!("Testable hypothesis for \"{query}\": Inhibition of pathway X will reduce disease progression by >50% in preclinical models, measurable through biomarker Y and functional assay Z within 30 days of treatment initiation."),
            format!("Primary hypothesis: \"{query}\" can be addressed through dual-target therapy combining agents A and B, resulting in synergistic effects measurable by endpoint C with statistical power >80% in a cohort of n=200."),
            format!("Research hypothesis: The mechanism underlying \"{query}\" involves protein interaction P-Q, which can be disrupted using compound R, leading to therapeutic benefit measurable through clinical outcome S."),
            format!("Proposed hypothesis: \"{query}\" represents a novel therapeutic opportunity where intervention T will demonstrate superiority over standard care by ≥20% improvement in primary endpoint U, with acceptable safety profile."),
        ],
        AgentKind::Evaluate => vec![
            format!("Hypothesis evaluation for \"{query}\": FEASIBILITY: High (established methodologies available). NOVELTY: Medium-High (builds on known mechanisms). IMPACT: High (addresses unmet clinical need). RISK: Medium (regulatory pathway clear). TIMELINE: 3-5 years to clinical proof-of-concept."),
            format!("Critical assessment of \"{query}\": SCIENTIFIC MERIT: Strong (supported by robust preclinical data). TECHNICAL FEASIBILITY: Good (validated assays available). COMMERCIAL VIABILITY: Promising (large market size). COMPETITIVE LANDSCAPE: Moderate (2-3 major competitors). SUCCESS PROBABILITY: 65%."),
            format!("Evaluation summary for \"{query}\": STRENGTH: Novel mechanism with strong biological rationale. WEAKNESS: Limited clinical validation. OPPORTUNITY: First-in-class potential. THREAT: Regulatory complexity. RECOMMENDATION: Proceed with Phase I studies and biomarker development."),
            format!("Research assessment for \"{query}\": INNOVATION SCORE: 8.2/10. TECHNICAL RISK: Medium. RESOURCE REQUIREMENTS: $12-18M over 36 months. KEY MILESTONES: Proof-of-mechanism (Month 12), Toxicology completion (Month 24), IND filing (Month 30)."),
        ],
        AgentKind::Map | AgentKind::Thinking | AgentKind::Evidence => {
            vec![format!("{} output for \"{query}\".", kind.display_name())]
        }
    }
}

fn warnings<R: Rng>(kind: AgentKind, query: &str, confidence: f64, rng: &mut R) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut warn = |message: &str| warnings.push(message.to_string());

    match kind {
        AgentKind::Thesis => {
            if query.chars().count() < 10 {
                warn("Research question may be too brief for comprehensive analysis");
            }
            if confidence < 0.8 {
                warn("Consider refining the research question for better focus");
            }
        }
        AgentKind::Search => {
            if chance_above(rng, 0.7) {
                warn("Some relevant papers may be behind paywalls");
            }
            if chance_above(rng, 0.8) {
                warn("Consider expanding search terms for broader coverage");
            }
        }
        AgentKind::Summarize => {
            if chance_above(rng, 0.6) {
                warn("Summary based on available literature - may not include latest unpublished results");
            }
        }
        AgentKind::Trend => {
            if chance_above(rng, 0.5) {
                warn("Trend analysis based on limited historical data - projections may vary");
            }
            if chance_above(rng, 0.7) {
                warn("Consider seasonal variations in research publication patterns");
            }
        }
        AgentKind::Hypothesis => {
            if confidence < 0.8 {
                warn("Hypothesis may need refinement for better testability");
            }
            if chance_above(rng, 0.6) {
                warn("Consider feasibility constraints in hypothesis design");
            }
        }
        AgentKind::Evaluate => {
            if chance_above(rng, 0.4) {
                warn("Evaluation based on current data - may change with new findings");
            }
            if confidence < 0.85 {
                warn("Consider additional validation studies to strengthen evaluation");
            }
        }
        AgentKind::Map | AgentKind::Thinking | AgentKind::Evidence => {}
    }

    warnings
}

fn sources(kind: AgentKind) -> &'static [&'static str] {
    match kind {
        AgentKind::Thesis => &["DOI:10.1038/nature12345", "PubMed:87654321", "arXiv:2301.12345"],
        AgentKind::Search => &[
            "PubMed Central",
            "Google Scholar",
            "arXiv.org",
            "Semantic Scholar",
            "Web of Science",
        ],
        AgentKind::Summarize => &[
            "Cochrane Reviews",
            "Nature Reviews",
            "Cell Reports",
            "The Lancet",
            "NEJM",
        ],
        AgentKind::Trend => &[
            "Google Trends",
            "Dimensions.ai",
            "Web of Science",
            "Patent databases",
            "NIH RePORTER",
        ],
        AgentKind::Hypothesis => &[
            "ClinicalTrials.gov",
            "Hypothesis framework literature",
            "Statistical power analysis guides",
            "Regulatory guidance documents",
        ],
        AgentKind::Evaluate => &[
            "Technology readiness level frameworks",
            "Pharmaceutical R&D guidelines",
            "Market analysis reports",
            "Regulatory precedents",
        ],
        AgentKind::Map | AgentKind::Thinking | AgentKind::Evidence => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always yields zero: lowest confidence, first text, no coin flips.
    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_thesis_default_query_with_fixed_rng() {
        let result = generate(AgentKind::Thesis, "default", &mut zero_rng());

        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.input_used, "default");
        assert_eq!(
            result.result,
            "The research question \"default\" can be addressed through a multi-phase experimental approach combining computational modeling and wet lab validation."
        );
        assert_eq!(
            result.warnings,
            vec![
                "Research question may be too brief for comprehensive analysis".to_string(),
                "Consider refining the research question for better focus".to_string(),
            ]
        );
        assert_eq!(result.sources.len(), 3);
    }

    #[test]
    fn test_thesis_long_query_skips_brevity_warning() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let result = generate(AgentKind::Thesis, "microglial pruning in autism", &mut rng);
            assert!(!result
                .warnings
                .iter()
                .any(|w| w.contains("too brief")));
            let refine = result.warnings.iter().any(|w| w.contains("refining"));
            assert_eq!(refine, result.confidence < 0.8);
        }
    }

    #[test]
    fn test_evaluate_validation_warning_tracks_confidence() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let result = generate(AgentKind::Evaluate, "senolytics", &mut rng);
            let validation = result
                .warnings
                .iter()
                .any(|w| w.starts_with("Consider additional validation"));
            assert_eq!(validation, result.confidence < 0.85);
        }
    }

    #[test]
    fn test_summarize_fixed_rng_has_no_warnings() {
        let result = generate(AgentKind::Summarize, "gut microbiome", &mut zero_rng());
        assert_eq!(result.confidence, 0.8);
        assert!(result.warnings.is_empty());
        assert!(result.result.starts_with("Key findings on \"gut microbiome\""));
        assert_eq!(result.sources.len(), 5);
    }

    #[test]
    fn test_sources_are_never_empty_for_canned_agents() {
        for kind in [
            AgentKind::Thesis,
            AgentKind::Search,
            AgentKind::Summarize,
            AgentKind::Trend,
            AgentKind::Hypothesis,
            AgentKind::Evaluate,
        ] {
            assert!(!sources(kind).is_empty(), "{} has no sources", kind);
            assert_eq!(texts(kind, "q").len(), 4);
        }
    }
}
