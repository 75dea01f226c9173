use crate::store::types::Question;

/// Case-insensitive substring test. An empty term matches everything.
pub fn matches(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term`, ignoring case, in corpus order.
pub fn search(corpus: &[Question], term: &str) -> Vec<Question> {
    corpus
        .iter()
        .filter(|q| matches(&q.text, term))
        .cloned()
        .collect()
}
