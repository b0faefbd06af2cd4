//! Load-time schema validation.
//!
//! Turns unvalidated [`PageRecord`]s into [`Page`]s. Every record is checked
//! and all violations are collected before failing, so a broken catalog can
//! be fixed in one pass.

use std::collections::{BTreeSet, HashSet};

use crate::error::{SchemaValidationError, Violation, ViolationKind};
use crate::models::{Page, PageRecord, Question, QuestionRecord};

/// Validates a full catalog.
pub fn validate_pages(records: Vec<PageRecord>) -> Result<Vec<Page>, SchemaValidationError> {
    let mut violations = Vec::new();
    let mut seen_pages = HashSet::new();
    let mut pages = Vec::with_capacity(records.len());

    for record in records {
        if !seen_pages.insert(record.id.clone()) {
            violations.push(Violation::page(&record.id, ViolationKind::DuplicatePageId));
        }
        if let Some(page) = validate_page(record, &mut violations) {
            pages.push(page);
        }
    }

    if violations.is_empty() {
        Ok(pages)
    } else {
        for violation in &violations {
            tracing::warn!("schema violation: {violation}");
        }
        Err(SchemaValidationError { violations })
    }
}

fn validate_page(record: PageRecord, violations: &mut Vec<Violation>) -> Option<Page> {
    let before = violations.len();
    let page_id = record.id;

    if let Some(kind) = check_id(&page_id) {
        violations.push(Violation::page(&page_id, kind));
    }
    if record.questions.is_empty() {
        violations.push(Violation::page(&page_id, ViolationKind::EmptyPage));
    }

    let mut seen_questions = HashSet::new();
    let mut questions = Vec::with_capacity(record.questions.len());

    for question in record.questions {
        if !seen_questions.insert(question.id.clone()) {
            violations.push(Violation::question(
                &page_id,
                &question.id,
                ViolationKind::DuplicateQuestionId,
            ));
        }
        if let Some(question) = validate_question(&page_id, question, violations) {
            questions.push(question);
        }
    }

    (violations.len() == before).then(|| Page::new(page_id, questions))
}

fn validate_question(
    page_id: &str,
    record: QuestionRecord,
    violations: &mut Vec<Violation>,
) -> Option<Question> {
    let mut found = Vec::new();

    if let Some(kind) = check_id(&record.id) {
        found.push(kind);
    }
    if record.question.trim().is_empty() {
        found.push(ViolationKind::EmptyPrompt);
    }
    if record.answers.is_empty() {
        found.push(ViolationKind::NoAnswers);
    }

    let mut answers = HashSet::new();
    for answer in &record.answers {
        if !answers.insert(answer.as_str()) {
            found.push(ViolationKind::DuplicateAnswer {
                answer: answer.clone(),
            });
        }
    }

    let mut correct = BTreeSet::new();
    for answer in &record.correct_answer {
        if !answers.contains(answer.as_str()) {
            found.push(ViolationKind::UnknownCorrectAnswer {
                answer: answer.clone(),
            });
        }
        if !correct.insert(answer.clone()) {
            found.push(ViolationKind::DuplicateCorrectAnswer {
                answer: answer.clone(),
            });
        }
    }

    if record.multi_select {
        if correct.is_empty() {
            found.push(ViolationKind::NoCorrectAnswer);
        }
    } else if correct.len() != 1 {
        found.push(ViolationKind::SingleSelectArity {
            found: correct.len(),
        });
    }

    if !found.is_empty() {
        violations.extend(
            found
                .into_iter()
                .map(|kind| Violation::question(page_id, &record.id, kind)),
        );
        return None;
    }

    Some(Question::new(
        record.id,
        record.question,
        record.multi_select,
        record.answers,
        correct,
    ))
}

fn check_id(id: &str) -> Option<ViolationKind> {
    if id.is_empty() {
        Some(ViolationKind::EmptyId)
    } else if id.trim() != id {
        Some(ViolationKind::UntrimmedId)
    } else {
        None
    }
}
