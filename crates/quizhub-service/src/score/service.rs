//! Quiz scoring operations.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use quizhub_auth::principal::Principal;
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_entity::quiz::Question;
use quizhub_store::traits::{IdentityStore, QuizStore};

/// A submitted answer: a single choice id or a set of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Single-answer question.
    One(String),
    /// Multiple-answer question.
    Many(Vec<String>),
}

/// The result of a scored submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutcome {
    /// Points gained by this submission.
    pub gained: u64,
    /// The identity's updated point total.
    pub total: u64,
}

/// Scores submissions and applies point deltas.
#[derive(Clone)]
pub struct ScoreService {
    /// Quiz store.
    quizzes: Arc<dyn QuizStore>,
    /// Identity store.
    identities: Arc<dyn IdentityStore>,
}

impl ScoreService {
    /// Creates a new score service.
    pub fn new(quizzes: Arc<dyn QuizStore>, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            quizzes,
            identities,
        }
    }

    /// Scores a submission and credits the points to the principal.
    ///
    /// One point per question whose answer exactly matches the
    /// correction set, order-insensitively for multiple answers. Points
    /// are applied through the store's atomic per-record delta.
    pub async fn submit(
        &self,
        principal: Option<&Principal>,
        quiz_id: &str,
        answers: &HashMap<String, AnswerValue>,
    ) -> AppResult<ScoreOutcome> {
        let principal =
            principal.ok_or_else(|| AppError::authentication("Authentication required"))?;

        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found"))?;

        let gained = quiz
            .questions
            .iter()
            .filter(|q| answers.get(&q.id).is_some_and(|a| matches(q, a)))
            .count() as u64;

        let updated = self
            .identities
            .add_points(&principal.id, gained)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %principal.id, quiz_id = %quiz_id, gained = gained, "Points awarded");
        Ok(ScoreOutcome {
            gained,
            total: updated.points,
        })
    }
}

/// Compares an answer against a question's correction set.
///
/// Both sides are sorted and joined, so multiple answers match in any
/// order but must be exactly the correction set.
fn matches(question: &Question, answer: &AnswerValue) -> bool {
    let mut expected: Vec<&str> = question.correction.iter().map(String::as_str).collect();
    expected.sort_unstable();
    let expected = expected.join("|");

    match answer {
        AnswerValue::One(value) => *value == expected,
        AnswerValue::Many(values) => {
            let mut got: Vec<&str> = values.iter().map(String::as_str).collect();
            got.sort_unstable();
            got.join("|") == expected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizhub_entity::quiz::{Choice, QuestionKind};

    fn question(id: &str, correction: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            prompt: "?".into(),
            kind: if correction.len() > 1 {
                QuestionKind::Multiple
            } else {
                QuestionKind::Simple
            },
            choices: correction
                .iter()
                .map(|c| Choice {
                    id: c.to_string(),
                    text: c.to_string(),
                })
                .collect(),
            correction: correction.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_answer_matches_exactly() {
        let q = question("q1", &["a"]);
        assert!(matches(&q, &AnswerValue::One("a".into())));
        assert!(!matches(&q, &AnswerValue::One("b".into())));
    }

    #[test]
    fn test_multiple_answers_match_order_insensitively() {
        let q = question("q1", &["a", "c"]);
        assert!(matches(
            &q,
            &AnswerValue::Many(vec!["c".into(), "a".into()])
        ));
        assert!(!matches(&q, &AnswerValue::Many(vec!["a".into()])));
        assert!(!matches(
            &q,
            &AnswerValue::Many(vec!["a".into(), "b".into(), "c".into()])
        ));
    }
}
