use serde::Deserialize;

/// A page as it appears in the JSON catalog, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageRecord {
    pub id: String,
    pub questions: Vec<QuestionRecord>,
}

/// A question as it appears in the JSON catalog, before validation.
///
/// `correct_answer` is kept as a list here so repeated entries in the
/// source data can be reported instead of silently collapsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub multi_select: bool,
    pub answers: Vec<String>,
    pub correct_answer: Vec<String>,
}
