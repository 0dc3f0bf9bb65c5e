//! Category management operations.

use std::sync::Arc;

use tracing::info;

use quizhub_auth::policy::PolicyEvaluator;
use quizhub_auth::principal::Principal;
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_core::types::fold;
use quizhub_entity::category::Category;
use quizhub_store::traits::{CategoryStore, QuizStore};

use crate::access::ensure_allowed;

/// Handles category creation and guarded deletion.
///
/// Deletion is a distinct admin-only action, independent of ownership:
/// a category referenced by at least one quiz only goes away with the
/// explicit force flag.
#[derive(Clone)]
pub struct CategoryService {
    /// Category store.
    categories: Arc<dyn CategoryStore>,
    /// Quiz store, for reference counting.
    quizzes: Arc<dyn QuizStore>,
    /// Policy evaluator.
    evaluator: PolicyEvaluator,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        categories: Arc<dyn CategoryStore>,
        quizzes: Arc<dyn QuizStore>,
        evaluator: PolicyEvaluator,
    ) -> Self {
        Self {
            categories,
            quizzes,
            evaluator,
        }
    }

    /// Creates a category. Uniqueness is normalized: case and accent
    /// variants of an existing name conflict.
    pub async fn create(&self, principal: Option<&Principal>, name: &str) -> AppResult<Category> {
        if principal.is_none() {
            return Err(AppError::authentication("Authentication required"));
        }
        if name.trim().is_empty() {
            return Err(AppError::validation("Category name is required"));
        }

        if self.categories.find(name).await?.is_some() {
            return Err(AppError::conflict("Category already exists"));
        }

        let category = Category::new(name.trim());
        self.categories.insert(category.clone()).await?;
        info!(category = %category.name, "Category created");
        Ok(category)
    }

    /// Lists every category.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.categories.list_all().await
    }

    /// Counts quizzes referencing the category, by normalized name.
    pub async fn reference_count(&self, name: &str) -> AppResult<usize> {
        let needle = fold(name);
        let quizzes = self.quizzes.list_all().await?;
        Ok(quizzes
            .iter()
            .filter(|q| q.category.as_deref().map(fold) == Some(needle.clone()))
            .count())
    }

    /// Deletes a category. Admin-only; a referenced category is a
    /// conflict unless `force` is set, in which case it is removed
    /// regardless of the reference count.
    pub async fn delete(
        &self,
        principal: Option<&Principal>,
        name: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_allowed(self.evaluator.authorize_admin(principal))?;

        if self.categories.find(name).await?.is_none() {
            return Err(AppError::not_found("Category not found"));
        }

        if !force {
            let used_by = self.reference_count(name).await?;
            if used_by > 0 {
                return Err(AppError::conflict(format!(
                    "Category is referenced by {used_by} quiz(zes); use force to delete anyway"
                )));
            }
        }

        self.categories.delete(name).await?;
        info!(category = %name, force = force, "Category deleted");
        Ok(())
    }
}
