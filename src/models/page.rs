use std::collections::HashMap;

use serde::Serialize;

use super::Question;

/// A validated group of questions presented together.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    id: String,
    questions: Vec<Question>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Page {
    /// Builds a page from questions whose ids are already known to be unique.
    pub(crate) fn new(id: String, questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id().to_owned(), i))
            .collect();

        Self {
            id,
            questions,
            index,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get_question(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(Question::id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.questions == other.questions
    }
}

impl Eq for Page {}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question::new(
            id.to_string(),
            format!("Prompt for {}", id),
            false,
            vec!["Yes".to_string(), "No".to_string()],
            ["Yes".to_string()].into_iter().collect(),
        )
    }

    #[test]
    fn test_get_question_by_id() {
        let page = Page::new("pg".to_string(), vec![question("a"), question("b")]);
        assert_eq!(page.get_question("b").map(Question::id), Some("b"));
        assert!(page.get_question("c").is_none());
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_question_ids_keep_order() {
        let page = Page::new(
            "pg".to_string(),
            vec![question("z"), question("a"), question("m")],
        );
        let ids: Vec<&str> = page.question_ids().collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_index_is_not_serialized() {
        let page = Page::new("pg".to_string(), vec![question("a")]);
        let json = serde_json::to_value(&page).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["id"], "pg");
        assert_eq!(json["questions"][0]["id"], "a");
    }
}
