//! API Data Transfer Objects
//!
//! Request and response bodies of the trivia HTTP API. Request fields are
//! optional at the serde level so that a missing field is reported as a
//! validation error with a JSON body instead of a bare extractor rejection.

use crate::store::types::{CategoryId, Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category id to display label, serialized as `{"1": "Science", ...}`.
pub type CategoryIndex = BTreeMap<CategoryId, String>;

/// A numeric field that clients send either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<NumberOrText>,
    pub category: Option<NumberOrText>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The category a quiz is played in, as sent by the front end
/// (`{"type": "Science", "id": 1}`, or id 0 for "All").
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategoryPayload {
    pub id: Option<NumberOrText>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategoryPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryIndex,
    pub total_categories: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CategoryId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Reply to a quiz request. `question` is `null` once the round is exhausted.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
