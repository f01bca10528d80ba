// Research question context
// Setting the current question and the banner shown on every page

use crate::state::{StateStore, StoreError};

/// What the dashboard shows above the agent cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionContext {
    /// No question set; agents will run with the default query
    Missing,
    /// A non-empty question is stored
    Set(String),
}

impl QuestionContext {
    /// Read the current context from `store`
    pub fn load(store: &StateStore) -> Result<Self, StoreError> {
        let question = store.current_question()?;
        Ok(if question.is_empty() {
            QuestionContext::Missing
        } else {
            QuestionContext::Set(question)
        })
    }

    /// One-line banner for the top of a page
    pub fn banner(&self) -> String {
        match self {
            QuestionContext::Missing => {
                "⚠️ No research question set. Agents will use default queries.".to_string()
            }
            QuestionContext::Set(question) => format!("Research Question: {question}"),
        }
    }
}

/// Store `question` trimmed; blank input is ignored
///
/// Returns whether the question was stored.
pub fn set_question(store: &StateStore, question: &str) -> Result<bool, StoreError> {
    let question = question.trim();
    if question.is_empty() {
        return Ok(false);
    }
    store.set_current_question(question)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_then_set() {
        let store = StateStore::in_memory();
        assert_eq!(QuestionContext::load(&store).unwrap(), QuestionContext::Missing);
        assert!(QuestionContext::Missing.banner().contains("default queries"));

        assert!(set_question(&store, "  Does exercise raise BDNF?  ").unwrap());
        let context = QuestionContext::load(&store).unwrap();
        assert_eq!(
            context,
            QuestionContext::Set("Does exercise raise BDNF?".to_string())
        );
        assert_eq!(context.banner(), "Research Question: Does exercise raise BDNF?");
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let store = StateStore::in_memory();
        set_question(&store, "kept").unwrap();
        assert!(!set_question(&store, "   ").unwrap());
        assert_eq!(store.current_question().unwrap(), "kept");
    }
}
