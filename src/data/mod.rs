mod loader;

pub use loader::{load_records_from_path, load_records_from_reader, load_records_from_str};

/// The catalog shipped with the crate.
pub const BUILTIN_QUESTIONS_JSON: &str = include_str!("../../data/quiz_questions.json");
