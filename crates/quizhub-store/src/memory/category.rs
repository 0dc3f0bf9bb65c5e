//! In-memory category store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use quizhub_core::result::AppResult;
use quizhub_core::types::fold;
use quizhub_entity::category::Category;

use crate::traits::CategoryStore;

/// In-memory category store keyed by normalized name.
///
/// The display form is kept as the stored value; lookups and deletes go
/// through the normalized key, so accent and case variants address the
/// same category.
#[derive(Debug, Clone, Default)]
pub struct MemoryCategoryStore {
    /// Normalized name to category.
    categories: Arc<DashMap<String, Category>>,
}

impl MemoryCategoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.iter().map(|entry| entry.clone()).collect())
    }

    async fn find(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self.categories.get(&fold(name)).map(|r| r.clone()))
    }

    async fn insert(&self, category: Category) -> AppResult<()> {
        self.categories
            .insert(category.normalized_name(), category);
        Ok(())
    }

    async fn delete(&self, name: &str) -> AppResult<bool> {
        Ok(self.categories.remove(&fold(name)).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accent_variants_address_same_category() {
        let store = MemoryCategoryStore::new();
        store.insert(Category::new("Géographie")).await.unwrap();

        let found = store.find("geographie").await.unwrap().unwrap();
        assert_eq!(found.name, "Géographie");

        assert!(store.delete("GEOGRAPHIE").await.unwrap());
        assert!(store.find("Géographie").await.unwrap().is_none());
    }
}
