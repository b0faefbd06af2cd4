//! Error types for catalog loading and lookup.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A lookup by page id or question id matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("page '{page_id}' not found")]
    Page { page_id: String },
    #[error("question '{question_id}' not found on page '{page_id}'")]
    Question {
        page_id: String,
        question_id: String,
    },
}

/// The catalog broke one or more schema rules at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("question bank failed validation with {} violation(s)", .violations.len())]
pub struct SchemaValidationError {
    pub violations: Vec<Violation>,
}

/// One schema rule broken by one page or question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub page_id: String,
    /// `None` when the violation concerns the page itself.
    pub question_id: Option<String>,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("duplicate page id")]
    DuplicatePageId,
    #[error("duplicate question id")]
    DuplicateQuestionId,
    #[error("id is empty")]
    EmptyId,
    #[error("id has leading or trailing whitespace")]
    UntrimmedId,
    #[error("question text is empty")]
    EmptyPrompt,
    #[error("page has no questions")]
    EmptyPage,
    #[error("question has no answers")]
    NoAnswers,
    #[error("answer '{answer}' is listed more than once")]
    DuplicateAnswer { answer: String },
    #[error("correct answer '{answer}' is not one of the answers")]
    UnknownCorrectAnswer { answer: String },
    #[error("correct answer '{answer}' is listed more than once")]
    DuplicateCorrectAnswer { answer: String },
    #[error("single-select question must have exactly one correct answer, found {found}")]
    SingleSelectArity { found: usize },
    #[error("question has no correct answer")]
    NoCorrectAnswer,
}

impl Violation {
    pub(crate) fn page(page_id: &str, kind: ViolationKind) -> Self {
        Self {
            page_id: page_id.to_owned(),
            question_id: None,
            kind,
        }
    }

    pub(crate) fn question(page_id: &str, question_id: &str, kind: ViolationKind) -> Self {
        Self {
            page_id: page_id.to_owned(),
            question_id: Some(question_id.to_owned()),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.question_id {
            Some(question_id) => write!(f, "{}/{}: {}", self.page_id, question_id, self.kind),
            None => write!(f, "{}: {}", self.page_id, self.kind),
        }
    }
}

/// Top-level error for loading and querying a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = NotFoundError::Page {
            page_id: "pg99".to_string(),
        };
        assert_eq!(err.to_string(), "page 'pg99' not found");

        let err = NotFoundError::Question {
            page_id: "pg1".to_string(),
            question_id: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "question 'nope' not found on page 'pg1'");
    }

    #[test]
    fn test_violation_display_includes_location() {
        let v = Violation::question(
            "pg1",
            "all_same",
            ViolationKind::UnknownCorrectAnswer {
                answer: "Maybe".to_string(),
            },
        );
        assert_eq!(
            v.to_string(),
            "pg1/all_same: correct answer 'Maybe' is not one of the answers"
        );

        let v = Violation::page("pg1", ViolationKind::EmptyPage);
        assert_eq!(v.to_string(), "pg1: page has no questions");
    }

    #[test]
    fn test_schema_error_counts_violations() {
        let err = SchemaValidationError {
            violations: vec![
                Violation::page("a", ViolationKind::DuplicatePageId),
                Violation::page("b", ViolationKind::EmptyPage),
            ],
        };
        assert_eq!(
            err.to_string(),
            "question bank failed validation with 2 violation(s)"
        );
    }
}
