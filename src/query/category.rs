use crate::store::types::{CategoryId, Question};

/// Result of filtering by category. No matches is its own outcome so the
/// listing endpoint can tell it apart from a populated category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    Empty,
    Found(Vec<Question>),
}

impl CategoryMatch {
    pub fn from_questions(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            CategoryMatch::Empty
        } else {
            CategoryMatch::Found(questions)
        }
    }

    pub fn count(&self) -> usize {
        match self {
            CategoryMatch::Empty => 0,
            CategoryMatch::Found(questions) => questions.len(),
        }
    }

    pub fn into_questions(self) -> Vec<Question> {
        match self {
            CategoryMatch::Empty => Vec::new(),
            CategoryMatch::Found(questions) => questions,
        }
    }
}

/// Questions whose category id equals `category_id`, in corpus order.
pub fn by_category(corpus: &[Question], category_id: CategoryId) -> Vec<Question> {
    corpus
        .iter()
        .filter(|q| q.category_id == category_id)
        .cloned()
        .collect()
}

pub fn filter_category(corpus: &[Question], category_id: CategoryId) -> CategoryMatch {
    CategoryMatch::from_questions(by_category(corpus, category_id))
}
