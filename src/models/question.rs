use std::collections::BTreeSet;

use serde::Serialize;

/// A validated quiz question.
///
/// Only produced by schema validation, so every value upholds the catalog
/// invariants: each correct answer is one of `answers`, single-select
/// questions have exactly one correct answer, and `answers` has no
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: String,
    question: String,
    multi_select: bool,
    answers: Vec<String>,
    correct_answer: BTreeSet<String>,
}

impl Question {
    pub(crate) fn new(
        id: String,
        question: String,
        multi_select: bool,
        answers: Vec<String>,
        correct_answer: BTreeSet<String>,
    ) -> Self {
        Self {
            id,
            question,
            multi_select,
            answers,
            correct_answer,
        }
    }

    /// Identifier, unique within the owning page.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prompt text shown to the user.
    pub fn text(&self) -> &str {
        &self.question
    }

    /// Whether more than one option may be selected.
    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    /// Selectable options in display order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answers(&self) -> &BTreeSet<String> {
        &self.correct_answer
    }

    /// Returns true if `answer` is one of the correct options.
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        self.correct_answer.contains(answer)
    }

    /// Returns true iff the submitted selection equals the correct set
    /// exactly. Missing or extra selections both make it incorrect.
    /// Repeated submissions of the same option count once.
    pub fn is_correct<I, S>(&self, submitted: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matched = BTreeSet::new();
        for answer in submitted {
            let answer = answer.as_ref();
            if !self.correct_answer.contains(answer) {
                return false;
            }
            matched.insert(answer.to_owned());
        }
        matched.len() == self.correct_answer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(multi_select: bool, answers: &[&str], correct: &[&str]) -> Question {
        Question::new(
            "q".to_string(),
            "Which?".to_string(),
            multi_select,
            answers.iter().map(|s| s.to_string()).collect(),
            correct.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_single_select_is_correct() {
        let q = question(false, &["Yes", "No"], &["No"]);
        assert!(q.is_correct(["No"]));
        assert!(!q.is_correct(["Yes"]));
        assert!(!q.is_correct(["Yes", "No"]));
        assert!(!q.is_correct(Vec::<&str>::new()));
    }

    #[test]
    fn test_multi_select_requires_exact_set() {
        let q = question(true, &["a", "b", "c", "d"], &["a", "c"]);
        assert!(q.is_correct(["a", "c"]));
        assert!(q.is_correct(["c", "a"]));
        assert!(q.is_correct(["a", "c", "a"]));
        assert!(!q.is_correct(["a"])); // subset
        assert!(!q.is_correct(["a", "b", "c"])); // superset
        assert!(!q.is_correct(["b", "d"]));
    }

    #[test]
    fn test_unknown_option_is_incorrect() {
        let q = question(false, &["Yes", "No"], &["No"]);
        assert!(!q.is_correct(["no"]));
        assert!(!q.is_correct(["Maybe"]));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let q = question(false, &["Yes", "No"], &["No"]);
        let submitted: Vec<String> = vec!["No".to_string()];
        assert!(q.is_correct(&submitted));
        assert!(q.is_correct_answer("No"));
        assert!(!q.is_correct_answer("Yes"));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let q = question(false, &["Yes", "No"], &["No"]);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["multiSelect"], false);
        assert_eq!(json["question"], "Which?");
        assert_eq!(json["answers"], serde_json::json!(["Yes", "No"]));
        assert_eq!(json["correctAnswer"], serde_json::json!(["No"]));
    }
}
