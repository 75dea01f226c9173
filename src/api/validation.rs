use super::types::{CategoryIndex, CreateQuestionRequest, QuizRequest, SearchRequest};
use crate::error::{Result, TriviaError};
use crate::quiz::types::QuizCategory;
use crate::store::types::{Category, CategoryId, NewQuestion, QuestionId};

use std::collections::HashSet;

/// Highest difficulty the game offers.
pub const MAX_DIFFICULTY: u8 = 5;

pub fn category_index(categories: &[Category]) -> CategoryIndex {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    let value = value.ok_or_else(|| TriviaError::validation(format!("missing field '{}'", field)))?;
    if value.trim().is_empty() {
        return Err(TriviaError::validation(format!("field '{}' is empty", field)));
    }
    Ok(value)
}

pub fn parse_new_question(req: CreateQuestionRequest) -> Result<NewQuestion> {
    let text = required_text(req.question, "question")?;
    let answer = required_text(req.answer, "answer")?;

    let difficulty = req
        .difficulty
        .ok_or_else(|| TriviaError::validation("missing field 'difficulty'"))?
        .as_i64()
        .and_then(|d| u8::try_from(d).ok())
        .filter(|d| (1..=MAX_DIFFICULTY).contains(d))
        .ok_or_else(|| {
            TriviaError::validation(format!(
                "field 'difficulty' must be an integer between 1 and {}",
                MAX_DIFFICULTY
            ))
        })?;

    let category_id = req
        .category
        .ok_or_else(|| TriviaError::validation("missing field 'category'"))?
        .as_i64()
        .and_then(|c| CategoryId::try_from(c).ok())
        .filter(|c| *c > 0)
        .ok_or_else(|| TriviaError::validation("field 'category' must be a positive integer"))?;

    Ok(NewQuestion {
        text,
        answer,
        category_id,
        difficulty,
    })
}

/// The search term is required but may be empty; an empty term lists every question.
pub fn parse_search_term(req: SearchRequest) -> Result<String> {
    req.search_term
        .ok_or_else(|| TriviaError::validation("missing field 'searchTerm'"))
}

pub fn parse_quiz_request(req: QuizRequest) -> Result<(QuizCategory, HashSet<QuestionId>)> {
    let (Some(previous), Some(category)) = (req.previous_questions, req.quiz_category) else {
        return Err(TriviaError::validation(
            "quiz category and previous questions are required",
        ));
    };

    // A category object without an id is the "All" choice.
    let category = match category.id {
        None => QuizCategory::All,
        Some(raw) => {
            let id = raw
                .as_i64()
                .and_then(|id| CategoryId::try_from(id).ok())
                .ok_or_else(|| {
                    TriviaError::validation("quiz category id must be a non-negative integer")
                })?;
            QuizCategory::from_id(id)
        }
    };

    Ok((category, previous.into_iter().collect()))
}
