//! Category store contract.

use async_trait::async_trait;

use quizhub_core::result::AppResult;
use quizhub_entity::category::Category;

/// Persistent storage for categories, keyed by normalized name.
#[async_trait]
pub trait CategoryStore: Send + Sync + 'static {
    /// Lists every category.
    async fn list_all(&self) -> AppResult<Vec<Category>>;

    /// Finds a category whose normalized name matches the given name.
    async fn find(&self, name: &str) -> AppResult<Option<Category>>;

    /// Inserts a new category.
    async fn insert(&self, category: Category) -> AppResult<()>;

    /// Deletes the category matching the given name (normalized).
    /// Returns `true` if a record was removed.
    async fn delete(&self, name: &str) -> AppResult<bool>;
}
