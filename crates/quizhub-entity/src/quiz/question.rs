//! Quiz question model.

use serde::{Deserialize, Serialize};

/// Whether a question accepts one answer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one correct choice.
    Simple,
    /// One or more correct choices; all must be selected.
    Multiple,
}

/// A selectable answer choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Choice identifier, unique within the question.
    pub id: String,
    /// Choice text shown to the player.
    pub text: String,
}

/// A single quiz question, including its correction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question identifier, unique within the quiz.
    pub id: String,
    /// The question text.
    pub prompt: String,
    /// Single- or multiple-answer question.
    pub kind: QuestionKind,
    /// The selectable choices.
    pub choices: Vec<Choice>,
    /// Choice ids forming the correct answer. Not exposed to players
    /// before submission.
    #[serde(default)]
    pub correction: Vec<String>,
}

/// A question as shown to a player: choices without the correction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    /// Question identifier.
    pub id: String,
    /// The question text.
    pub prompt: String,
    /// Single- or multiple-answer question.
    pub kind: QuestionKind,
    /// The selectable choices.
    pub choices: Vec<Choice>,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            prompt: q.prompt.clone(),
            kind: q.kind,
            choices: q.choices.clone(),
        }
    }
}
