//! Question Store Module
//!
//! Holds Question and Category records and answers the predicate queries the
//! query and quiz logic is built on.
//!
//! ## Contract
//! - **Ordering**: every listing is returned in ascending id order so that
//!   pagination is reproducible across calls.
//! - **Identity**: ids are assigned on insert and never reused after a delete.
//! - **Integrity**: an insert whose category does not exist is refused.
//! - **Atomicity**: each call is a single read or write, and a listing is one
//!   consistent view of the store; nothing spans calls.

pub mod memory;
pub mod types;

use crate::error::Result;
use types::{Category, CategoryId, DeleteOutcome, NewQuestion, Question, QuestionId};

/// Storage backend for the trivia API.
///
/// Implementations report their own faults as `TriviaError::Store`; callers
/// propagate them unchanged.
pub trait QuestionStore: Send + Sync {
    /// All questions, ascending by id.
    fn all(&self) -> Result<Vec<Question>>;

    fn by_id(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Questions in `category_id`, ascending by id. Unknown ids yield an empty list.
    fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    fn search(&self, term: &str) -> Result<Vec<Question>>;

    fn insert(&self, question: NewQuestion) -> Result<QuestionId>;

    fn delete(&self, id: QuestionId) -> Result<DeleteOutcome>;

    /// All categories, ascending by id.
    fn categories(&self) -> Result<Vec<Category>>;

    fn category(&self, id: CategoryId) -> Result<Option<Category>>;
}
