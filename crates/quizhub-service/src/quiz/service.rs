//! Quiz CRUD operations.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use quizhub_auth::policy::{Action, PolicyEvaluator};
use quizhub_auth::principal::Principal;
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_entity::quiz::{Owner, Question, Quiz, QuizView};
use quizhub_store::traits::QuizStore;

use crate::access::ensure_allowed;

/// Data required to create a quiz. The creator picks the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    /// Quiz identifier.
    pub id: String,
    /// Quiz title.
    pub title: String,
    /// The questions, corrections included.
    pub questions: Vec<Question>,
    /// Optional category name.
    #[serde(default)]
    pub category: Option<String>,
    /// Optional cover image reference.
    #[serde(default)]
    pub image: Option<String>,
}

/// Field-level patch for updating a quiz. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizDraft {
    /// New title.
    pub title: Option<String>,
    /// Replacement question list.
    pub questions: Option<Vec<Question>>,
    /// New category name.
    pub category: Option<String>,
    /// New cover image reference.
    pub image: Option<String>,
}

/// A quiz as listed publicly: id, title, and the resolved owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    /// Quiz identifier.
    pub id: String,
    /// Quiz title.
    pub title: String,
    /// Highest-priority owner reference, tolerant of legacy records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

/// What a read returns, depending on who asks.
#[derive(Debug, Clone)]
pub enum QuizContent {
    /// Owner or admin: the stored quiz, corrections included.
    Full(Quiz),
    /// Everyone else: corrections stripped.
    Player(QuizView),
}

/// Handles quiz CRUD with ownership enforcement.
#[derive(Clone)]
pub struct QuizService {
    /// Quiz store.
    quizzes: Arc<dyn QuizStore>,
    /// Policy evaluator.
    evaluator: PolicyEvaluator,
}

impl QuizService {
    /// Creates a new quiz service.
    pub fn new(quizzes: Arc<dyn QuizStore>, evaluator: PolicyEvaluator) -> Self {
        Self { quizzes, evaluator }
    }

    /// Creates a quiz owned by the principal.
    ///
    /// New records carry the canonical `ownerId` only; the legacy owner
    /// fields are never written on creation.
    pub async fn create(
        &self,
        principal: Option<&Principal>,
        draft: QuizDraft,
    ) -> AppResult<Quiz> {
        let principal =
            principal.ok_or_else(|| AppError::authentication("Authentication required"))?;

        if draft.id.trim().is_empty() {
            return Err(AppError::validation("Quiz id is required"));
        }
        if draft.title.trim().is_empty() {
            return Err(AppError::validation("Quiz title is required"));
        }

        if self.quizzes.find_by_id(&draft.id).await?.is_some() {
            return Err(AppError::conflict("A quiz with this id already exists"));
        }

        let quiz = Quiz {
            id: draft.id,
            title: draft.title,
            questions: draft.questions,
            category: draft.category,
            image: draft.image,
            created_at: Utc::now(),
            owner_id: Some(principal.id.clone()),
            auteur_id: None,
            created_by: None,
            user_id: None,
            owner_email: None,
        };

        let created = self.quizzes.insert(quiz).await?;
        info!(quiz_id = %created.id, user_id = %principal.id, "Quiz created");
        Ok(created)
    }

    /// Lists every quiz as a public summary.
    pub async fn list(&self) -> AppResult<Vec<QuizSummary>> {
        let quizzes = self.quizzes.list_all().await?;
        Ok(quizzes
            .iter()
            .map(|q| QuizSummary {
                id: q.id.clone(),
                title: q.title.clone(),
                owner: q.owner_candidates().primary().cloned(),
            })
            .collect())
    }

    /// Reads a quiz. Owners and admins get the full record; everyone
    /// else gets the correction-stripped view.
    pub async fn get(&self, principal: Option<&Principal>, id: &str) -> AppResult<QuizContent> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found"))?;

        let decision = self
            .evaluator
            .authorize(principal, &quiz.owner_candidates(), Action::Read);
        if decision.is_allowed() {
            Ok(QuizContent::Full(quiz))
        } else {
            Ok(QuizContent::Player(QuizView::from(&quiz)))
        }
    }

    /// Updates a quiz. Existence is checked before authorization; the
    /// stored record's owner fields are preserved as-is.
    pub async fn update(
        &self,
        principal: Option<&Principal>,
        id: &str,
        draft: UpdateQuizDraft,
    ) -> AppResult<Quiz> {
        let mut quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found"))?;

        ensure_allowed(
            self.evaluator
                .authorize(principal, &quiz.owner_candidates(), Action::Update),
        )?;

        if let Some(title) = draft.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Quiz title is required"));
            }
            quiz.title = title;
        }
        if let Some(questions) = draft.questions {
            quiz.questions = questions;
        }
        if let Some(category) = draft.category {
            quiz.category = Some(category);
        }
        if let Some(image) = draft.image {
            quiz.image = Some(image);
        }

        if !self.quizzes.update(id, quiz.clone()).await? {
            return Err(AppError::not_found("Quiz not found"));
        }

        info!(quiz_id = %id, "Quiz updated");
        Ok(quiz)
    }

    /// Deletes a quiz. Existence is checked before authorization.
    pub async fn delete(&self, principal: Option<&Principal>, id: &str) -> AppResult<()> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found"))?;

        ensure_allowed(
            self.evaluator
                .authorize(principal, &quiz.owner_candidates(), Action::Delete),
        )?;

        self.quizzes.delete(id).await?;
        info!(quiz_id = %id, "Quiz deleted");
        Ok(())
    }
}
