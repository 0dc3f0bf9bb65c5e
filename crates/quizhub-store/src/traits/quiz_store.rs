//! Quiz store contract.

use async_trait::async_trait;

use quizhub_core::result::AppResult;
use quizhub_entity::quiz::Quiz;

/// Persistent storage for quizzes.
#[async_trait]
pub trait QuizStore: Send + Sync + 'static {
    /// Lists every quiz.
    async fn list_all(&self) -> AppResult<Vec<Quiz>>;

    /// Finds a quiz by id (trimmed string comparison).
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;

    /// Inserts a new quiz and returns it.
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;

    /// Replaces the quiz stored under `id`. Returns `false` if the id is
    /// unknown.
    async fn update(&self, id: &str, quiz: Quiz) -> AppResult<bool>;

    /// Deletes a quiz. Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
