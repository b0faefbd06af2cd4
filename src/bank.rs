//! The validated, read-only question catalog.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use serde::Serialize;

use crate::data::{
    BUILTIN_QUESTIONS_JSON, load_records_from_path, load_records_from_reader,
    load_records_from_str,
};
use crate::error::{BankError, NotFoundError, SchemaValidationError};
use crate::models::{Page, PageRecord, Question};
use crate::validate::validate_pages;

static BUILTIN: LazyLock<QuestionBank> = LazyLock::new(|| {
    QuestionBank::from_json_str(BUILTIN_QUESTIONS_JSON)
        .expect("built-in question catalog must be valid")
});

/// An immutable catalog of quiz pages.
///
/// Construction validates every page and question, so lookups can assume
/// the catalog invariants hold. Pages keep their source order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    pages: Vec<Page>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Validate `records` and build a bank from them.
    pub fn new(records: Vec<PageRecord>) -> Result<Self, SchemaValidationError> {
        let pages = validate_pages(records)?;
        let index = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.id().to_owned(), i))
            .collect();

        let bank = Self { pages, index };
        tracing::debug!(
            "question bank loaded: {} page(s), {} question(s)",
            bank.len(),
            bank.question_count()
        );
        Ok(bank)
    }

    /// The catalog embedded in the crate, parsed on first access.
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN
    }

    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        Ok(Self::new(load_records_from_str(json)?)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        Ok(Self::new(load_records_from_reader(reader)?)?)
    }

    /// Load and validate a catalog from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use question_bank::QuestionBank;
    ///
    /// let bank = QuestionBank::from_json_path("questions.json").expect("Failed to load questions");
    /// println!("{} pages", bank.len());
    /// ```
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        Ok(Self::new(load_records_from_path(path)?)?)
    }

    /// Returns the page with `page_id`.
    pub fn get_page(&self, page_id: &str) -> Result<&Page, NotFoundError> {
        match self.index.get(page_id) {
            Some(&i) => Ok(&self.pages[i]),
            None => {
                tracing::debug!("lookup miss for page '{page_id}'");
                Err(NotFoundError::Page {
                    page_id: page_id.to_owned(),
                })
            }
        }
    }

    /// Returns the question matching both ids.
    pub fn get_question(&self, page_id: &str, question_id: &str) -> Result<&Question, NotFoundError> {
        let page = self.get_page(page_id)?;
        page.get_question(question_id).ok_or_else(|| {
            tracing::debug!("lookup miss for question '{question_id}' on page '{page_id}'");
            NotFoundError::Question {
                page_id: page_id.to_owned(),
                question_id: question_id.to_owned(),
            }
        })
    }

    /// Returns true iff `submitted`, taken as a set, equals the question's
    /// correct answers exactly.
    ///
    /// ```rust
    /// use question_bank::QuestionBank;
    ///
    /// let bank = QuestionBank::builtin();
    /// assert!(bank.is_correct("pg1", "all_same", ["No"]).unwrap());
    /// assert!(!bank.is_correct("pg1", "all_same", ["Yes", "No"]).unwrap());
    /// ```
    pub fn is_correct<I, S>(
        &self,
        page_id: &str,
        question_id: &str,
        submitted: I,
    ) -> Result<bool, NotFoundError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.get_question(page_id, question_id)?.is_correct(submitted))
    }

    pub fn contains_page(&self, page_id: &str) -> bool {
        self.index.contains_key(page_id)
    }

    /// Pages in source order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(Page::id)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of questions across all pages.
    pub fn question_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Serialize the catalog back to its JSON wire format.
    pub fn to_json_pretty(&self) -> Result<String, BankError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
