//! In-memory quiz store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use quizhub_core::result::AppResult;
use quizhub_core::types::fold_id;
use quizhub_entity::quiz::Quiz;

use crate::traits::QuizStore;

/// In-memory quiz store keyed by trimmed quiz id.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuizStore {
    /// Quiz id to record.
    quizzes: Arc<DashMap<String, Quiz>>,
}

impl MemoryQuizStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        Ok(self.quizzes.iter().map(|entry| entry.clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.get(fold_id(id)).map(|r| r.clone()))
    }

    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes
            .insert(fold_id(&quiz.id).to_string(), quiz.clone());
        debug!(quiz_id = %quiz.id, "Quiz inserted");
        Ok(quiz)
    }

    async fn update(&self, id: &str, quiz: Quiz) -> AppResult<bool> {
        match self.quizzes.get_mut(fold_id(id)) {
            Some(mut entry) => {
                *entry = quiz;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.quizzes.remove(fold_id(id)).is_some();
        if removed {
            debug!(quiz_id = %id, "Quiz deleted");
        }
        Ok(removed)
    }
}
