//! Thinking agent: Socratic questions about the research question

use super::{chance_above, AgentKind, AgentResult, ThinkingResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fewest questions returned per call
pub const MIN_QUESTIONS: usize = 4;

/// Most questions returned per call
pub const MAX_QUESTIONS: usize = 6;

fn socratic_questions(query: &str) -> Vec<String> {
    vec![
        format!("What assumptions are you making about the mechanisms underlying \"{query}\"?"),
        format!("How might your research background or institutional bias influence your approach to \"{query}\"?"),
        format!("What would it mean for the field if your hypothesis about \"{query}\" were proven wrong?"),
        format!("Are you considering all relevant stakeholders who might be affected by research on \"{query}\"?"),
        format!("What evidence would you need to see to change your mind about the importance of \"{query}\"?"),
        format!("How recent and diverse are the sources informing your understanding of \"{query}\"?"),
        format!("What ethical considerations have you identified related to research on \"{query}\"?"),
        format!("How might the methodology you choose influence the outcomes of your research on \"{query}\"?"),
        format!("What alternative explanations exist for the phenomena you're studying in \"{query}\"?"),
        format!("Are there any conflicting interests or funding sources that might bias research on \"{query}\"?"),
    ]
}

/// Generate the thinking payload for `query`
pub fn generate<R: Rng>(query: &str, rng: &mut R) -> ThinkingResult {
    let confidence = AgentKind::Thinking.sample_confidence(rng);

    let count = rng.gen_range(MIN_QUESTIONS..=MAX_QUESTIONS);
    let mut questions = socratic_questions(query);
    questions.shuffle(rng);
    questions.truncate(count);

    let mut warnings = Vec::new();
    if chance_above(rng, 0.7) {
        warnings.push(
            "Socratic questioning is most effective when combined with peer discussion".to_string(),
        );
    }

    ThinkingResult {
        base: AgentResult {
            result: format!(
                "Generated {} Socratic questions to challenge assumptions and deepen critical thinking about \"{}\". These questions are designed to reveal hidden biases, explore alternative perspectives, and strengthen your research approach.",
                questions.len(),
                query
            ),
            input_used: query.to_string(),
            confidence,
            warnings,
            sources: vec![
                "Socratic method in scientific inquiry".to_string(),
                "Critical thinking frameworks".to_string(),
                "Research bias identification guides".to_string(),
                "Philosophy of science literature".to_string(),
            ],
        },
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_question_count_and_uniqueness() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let thinking = generate("prion spread", &mut rng);
            let count = thinking.questions.len();
            assert!((MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count));

            let unique: HashSet<&String> = thinking.questions.iter().collect();
            assert_eq!(unique.len(), count);
            assert!(thinking.questions.iter().all(|q| q.contains("\"prion spread\"")));
            assert!(thinking
                .base
                .result
                .starts_with(&format!("Generated {count} Socratic questions")));
        }
    }

    #[test]
    fn test_questions_come_from_the_fixed_pool() {
        let pool: HashSet<String> = socratic_questions("q").into_iter().collect();
        let thinking = generate("q", &mut StdRng::seed_from_u64(2));
        assert!(thinking.questions.iter().all(|q| pool.contains(q)));
    }
}
