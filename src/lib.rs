//! # question-bank
//!
//! A validated, read-only catalog of quiz pages and questions.
//!
//! ## Usage
//!
//! ```rust
//! use question_bank::{NotFoundError, QuestionBank};
//!
//! fn main() -> Result<(), NotFoundError> {
//!     // The built-in catalog is parsed once and shared
//!     let bank = QuestionBank::builtin();
//!
//!     let question = bank.get_question("pg1", "all_same")?;
//!     println!("{}", question.text());
//!
//!     // Correctness is exact set equality with the correct answers
//!     assert!(bank.is_correct("pg1", "all_same", ["No"])?);
//!     assert!(!bank.is_correct("pg1", "all_same", ["Yes", "No"])?);
//!
//!     Ok(())
//! }
//! ```

mod bank;
pub mod cli;
mod data;
mod error;
mod models;
mod validate;

pub use bank::QuestionBank;
pub use data::BUILTIN_QUESTIONS_JSON;
pub use error::{BankError, NotFoundError, SchemaValidationError, Violation, ViolationKind};
pub use models::{Page, PageRecord, Question, QuestionRecord};
pub use validate::validate_pages;
