use super::QuestionStore;
use super::types::*;
use crate::error::{Result, TriviaError};
use crate::query::{category, searcher};

use anyhow::Context;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory question store.
///
/// Handlers share one instance behind an `Arc`. Questions sit under a single
/// read-write lock so every listing is taken from one consistent view; the
/// read-only categories live in a concurrent map. Ids are drawn while the
/// write lock is held and the counter only moves forward, so deleted ids are
/// never handed out again.
pub struct MemoryStore {
    questions: RwLock<BTreeMap<QuestionId, Question>>,
    categories: DashMap<CategoryId, Category>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Empty store with the given categories.
    pub fn new(categories: Vec<Category>) -> Self {
        let map = DashMap::new();
        for c in categories {
            map.insert(c.id, c);
        }

        Self {
            questions: RwLock::new(BTreeMap::new()),
            categories: map,
            next_id: AtomicU64::new(1),
        }
    }

    /// Empty store with the default trivia categories.
    pub fn with_default_categories() -> Self {
        Self::new(default_categories())
    }

    /// Builds a store from seed data.
    ///
    /// An empty category list falls back to the default categories. Questions
    /// with explicit ids keep them; the rest are numbered after the highest id
    /// seen so far.
    pub fn from_seed(seed: SeedFile) -> anyhow::Result<Self> {
        let categories = if seed.categories.is_empty() {
            default_categories()
        } else {
            seed.categories
        };
        let store = Self::new(categories);

        let mut next_id = seed
            .questions
            .iter()
            .filter_map(|q| q.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .context("Seed question ids leave no room for new questions")?;
        let mut rows = BTreeMap::new();

        for q in seed.questions {
            if !store.categories.contains_key(&q.category) {
                anyhow::bail!(
                    "Seed question {:?} references unknown category {}",
                    q.question,
                    q.category
                );
            }
            if q.difficulty == 0 {
                anyhow::bail!("Seed question {:?} has difficulty 0", q.question);
            }

            let id = match q.id {
                Some(id) => id,
                None => {
                    let id = next_id;
                    next_id = next_id
                        .checked_add(1)
                        .context("Seed question ids leave no room for new questions")?;
                    id
                }
            };

            if rows.contains_key(&id) {
                anyhow::bail!("Duplicate question id {} in seed", id);
            }

            rows.insert(
                id,
                Question {
                    id,
                    text: q.question,
                    answer: q.answer,
                    category_id: q.category,
                    difficulty: q.difficulty,
                },
            );
        }

        tracing::info!(
            "Seeded store with {} categories and {} questions",
            store.categories.len(),
            rows.len()
        );
        *store.questions.write() = rows;
        store.next_id.store(next_id, Ordering::SeqCst);

        Ok(store)
    }

    /// Reads and parses a JSON seed file, then builds a store from it.
    pub fn from_seed_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed: SeedFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        Self::from_seed(seed)
    }

    pub fn question_count(&self) -> usize {
        self.questions.read().len()
    }

    /// Every question in id order, copied out under one read lock.
    fn sorted_questions(&self) -> Vec<Question> {
        self.questions.read().values().cloned().collect()
    }
}

impl QuestionStore for MemoryStore {
    fn all(&self) -> Result<Vec<Question>> {
        Ok(self.sorted_questions())
    }

    fn by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.questions.read().get(&id).cloned())
    }

    fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>> {
        Ok(category::by_category(&self.sorted_questions(), category_id))
    }

    fn search(&self, term: &str) -> Result<Vec<Question>> {
        Ok(searcher::search(&self.sorted_questions(), term))
    }

    fn insert(&self, question: NewQuestion) -> Result<QuestionId> {
        if !self.categories.contains_key(&question.category_id) {
            return Err(TriviaError::unprocessable(format!(
                "category {} does not exist",
                question.category_id
            )));
        }

        let mut questions = self.questions.write();
        let id = self.next_id.load(Ordering::SeqCst);
        let next = id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("question id space exhausted"))?;
        self.next_id.store(next, Ordering::SeqCst);
        questions.insert(
            id,
            Question {
                id,
                text: question.text,
                answer: question.answer,
                category_id: question.category_id,
                difficulty: question.difficulty,
            },
        );
        drop(questions);

        tracing::debug!("Inserted question {}", id);
        Ok(id)
    }

    fn delete(&self, id: QuestionId) -> Result<DeleteOutcome> {
        match self.questions.write().remove(&id) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    fn categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.categories.iter().map(|e| e.value().clone()).collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.categories.get(&id).map(|e| e.value().clone()))
    }
}
