//! Quiz entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::owner::OwnerCandidates;
use super::question::{Question, QuestionView};

/// A stored quiz.
///
/// The wire shape matches the legacy `quizz.json` records, including
/// every legacy owner field ever written. New quizzes set only the
/// canonical `ownerId`; the others exist so old records deserialize and
/// keep their ownership resolvable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Quiz identifier, assigned by the creator. Unique and immutable.
    pub id: String,
    /// Quiz title.
    pub title: String,
    /// The questions, corrections included.
    pub questions: Vec<Question>,
    /// Optional category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional cover image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Canonical owner id. The only owner field written on new records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Legacy owner id field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auteur_id: Option<String>,
    /// Legacy owner id field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Legacy owner id field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Legacy owner email, consulted only when no id field is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

impl Quiz {
    /// Extracts the ordered owner candidate list for this record.
    pub fn owner_candidates(&self) -> OwnerCandidates {
        OwnerCandidates::from_fields(
            self.owner_id.as_deref(),
            self.auteur_id.as_deref(),
            self.created_by.as_deref(),
            self.user_id.as_deref(),
            self.owner_email.as_deref(),
        )
    }
}

/// A quiz as shown to a player: questions without their correction sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    /// Quiz identifier.
    pub id: String,
    /// Quiz title.
    pub title: String,
    /// The questions, corrections stripped.
    pub questions: Vec<QuestionView>,
    /// Optional category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional cover image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
            category: quiz.category.clone(),
            image: quiz.image.clone(),
        }
    }
}
