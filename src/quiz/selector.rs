use super::types::QuizCategory;
use crate::error::Result;
use crate::store::QuestionStore;
use crate::store::types::{Question, QuestionId};

use rand::Rng;
use std::collections::HashSet;

/// Loads the candidate pool for a round: every question, or one category's.
pub fn candidate_pool<S>(store: &S, category: QuizCategory) -> Result<Vec<Question>>
where
    S: QuestionStore + ?Sized,
{
    match category {
        QuizCategory::All => store.all(),
        QuizCategory::Category(id) => store.by_category(id),
    }
}

/// Drops every question whose id was already served, then picks one of the
/// rest uniformly at random. `None` means the round is exhausted.
pub fn pick_unseen<R>(
    pool: Vec<Question>,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng,
{
    let mut remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let idx = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(idx))
}

/// Next quiz question using the supplied random source.
pub fn next_question_with<S, R>(
    store: &S,
    category: QuizCategory,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<Option<Question>>
where
    S: QuestionStore + ?Sized,
    R: Rng,
{
    let pool = candidate_pool(store, category)?;
    let pool_size = pool.len();
    let picked = pick_unseen(pool, previous, rng);

    match &picked {
        Some(q) => tracing::debug!(
            "Quiz {:?}: picked question {} from pool of {} ({} already asked)",
            category,
            q.id,
            pool_size,
            previous.len()
        ),
        None => tracing::debug!(
            "Quiz {:?}: pool of {} exhausted after {} questions",
            category,
            pool_size,
            previous.len()
        ),
    }

    Ok(picked)
}

/// Next quiz question drawn with the thread-local generator.
pub fn next_question<S>(
    store: &S,
    category: QuizCategory,
    previous: &HashSet<QuestionId>,
) -> Result<Option<Question>>
where
    S: QuestionStore + ?Sized,
{
    next_question_with(store, category, previous, &mut rand::thread_rng())
}
