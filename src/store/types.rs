//! Store Data Types
//!
//! Records held by the question store and the shapes used to create and seed them.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a question.
pub type QuestionId = u64;

/// Identifier of a category.
pub type CategoryId = u64;

/// A trivia question as it is stored and served.
///
/// Serialized with the field names the game front end expects
/// (`question`, `answer`, `category`, `difficulty`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    pub difficulty: u8,
}

/// A category label. Categories are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A question that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: CategoryId,
    pub difficulty: u8,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// A question entry in a seed file. `id` is optional; missing ids are assigned
/// in file order.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub id: Option<QuestionId>,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Contents of a JSON seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// The six categories the trivia front end ships with.
pub fn default_categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, kind)| Category {
            id: i as CategoryId + 1,
            kind: kind.to_string(),
        })
        .collect()
}
