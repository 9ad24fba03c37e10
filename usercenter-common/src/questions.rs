//! Security question catalog and selector options

use serde::{Deserialize, Serialize};

/// Questions offered when the account service does not provide a list
const FALLBACK_QUESTIONS: [&str; 5] = [
    "What is your favourite song?",
    "What is your favourite movie?",
    "What is your favourite colour?",
    "What is your favourite game?",
    "What is your favourite food?",
];

/// Ordered list of security questions a user may choose from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuestionCatalog {
    questions: Vec<String>,
}

/// One `<option>` of a question selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub text: String,
    pub disabled: bool,
}

impl SecurityQuestionCatalog {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect())
    }

    /// Append previously chosen questions that the catalog no longer lists, so
    /// a stored choice still shows up in its selector.
    pub fn with_existing(mut self, existing: &[&str]) -> Self {
        for question in existing {
            if !question.is_empty() && !self.contains(question) {
                self.questions.push(question.to_string());
            }
        }
        self
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn contains(&self, question: &str) -> bool {
        self.questions.iter().any(|q| q == question)
    }

    /// Options for the first selector: everything is selectable
    pub fn first_options(&self) -> Vec<QuestionOption> {
        self.options_excluding("")
    }

    /// Options for the second selector. The entry equal to the first
    /// question stays listed but cannot be picked.
    pub fn second_options(&self, first_question: &str) -> Vec<QuestionOption> {
        self.options_excluding(first_question)
    }

    fn options_excluding(&self, taken: &str) -> Vec<QuestionOption> {
        self.questions
            .iter()
            .map(|question| QuestionOption {
                text: question.clone(),
                disabled: !taken.is_empty() && question == taken,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SecurityQuestionCatalog {
        SecurityQuestionCatalog::new(vec![
            "Q_A".to_string(),
            "Q_B".to_string(),
            "Q_C".to_string(),
        ])
    }

    #[test]
    fn test_second_selector_disables_first_choice() {
        let options = catalog().second_options("Q_A");

        assert_eq!(options.len(), 3);
        let q_a = options.iter().find(|o| o.text == "Q_A").unwrap();
        assert!(q_a.disabled);
        assert!(options.iter().filter(|o| o.text != "Q_A").all(|o| !o.disabled));
    }

    #[test]
    fn test_unset_first_question_disables_nothing() {
        assert!(catalog().second_options("").iter().all(|o| !o.disabled));
        assert!(catalog().first_options().iter().all(|o| !o.disabled));
    }

    #[test]
    fn test_with_existing_appends_missing_only() {
        let catalog = catalog().with_existing(&["Q_B", "Old question", ""]);
        assert_eq!(catalog.questions(), &["Q_A", "Q_B", "Q_C", "Old question"]);
    }

    #[test]
    fn test_fallback_catalog() {
        let catalog = SecurityQuestionCatalog::fallback();
        assert_eq!(catalog.questions().len(), 5);
        assert!(catalog.contains("What is your favourite food?"));
    }
}
