//! Scoring: correction matching and point accumulation.

mod common;

use std::collections::HashMap;

use common::TestApp;
use quizhub_core::error::ErrorKind;
use quizhub_entity::quiz::{Choice, Question, QuestionKind};
use quizhub_service::{AnswerValue, QuizDraft};

fn mixed_quiz(id: &str) -> QuizDraft {
    QuizDraft {
        id: id.to_string(),
        title: "Mélange".to_string(),
        questions: vec![
            Question {
                id: "q1".into(),
                prompt: "Capitale de la France ?".into(),
                kind: QuestionKind::Simple,
                choices: vec![
                    Choice {
                        id: "a".into(),
                        text: "Paris".into(),
                    },
                    Choice {
                        id: "b".into(),
                        text: "Lyon".into(),
                    },
                ],
                correction: vec!["a".into()],
            },
            Question {
                id: "q2".into(),
                prompt: "Pays frontaliers de la France ?".into(),
                kind: QuestionKind::Multiple,
                choices: vec![
                    Choice {
                        id: "a".into(),
                        text: "Espagne".into(),
                    },
                    Choice {
                        id: "b".into(),
                        text: "Portugal".into(),
                    },
                    Choice {
                        id: "c".into(),
                        text: "Italie".into(),
                    },
                ],
                correction: vec!["a".into(), "c".into()],
            },
        ],
        category: None,
        image: None,
    }
}

#[tokio::test]
async fn test_points_accumulate_across_submissions() {
    let app = TestApp::new();
    let (_, u1) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;
    app.quizzes.create(Some(&u1), mixed_quiz("quiz-1")).await.unwrap();

    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), AnswerValue::One("a".into()));
    // Multiple answers in reverse order still match.
    answers.insert(
        "q2".to_string(),
        AnswerValue::Many(vec!["c".into(), "a".into()]),
    );

    let outcome = app.scores.submit(Some(&u1), "quiz-1", &answers).await.unwrap();
    assert_eq!(outcome.gained, 2);
    assert_eq!(outcome.total, 2);

    let outcome = app.scores.submit(Some(&u1), "quiz-1", &answers).await.unwrap();
    assert_eq!(outcome.gained, 2);
    assert_eq!(outcome.total, 4);
}

#[tokio::test]
async fn test_wrong_and_missing_answers_score_zero() {
    let app = TestApp::new();
    let (_, u1) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;
    app.quizzes.create(Some(&u1), mixed_quiz("quiz-1")).await.unwrap();

    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), AnswerValue::One("b".into()));
    // q2 unanswered.

    let outcome = app.scores.submit(Some(&u1), "quiz-1", &answers).await.unwrap();
    assert_eq!(outcome.gained, 0);
    assert_eq!(outcome.total, 0);
}

#[tokio::test]
async fn test_submission_requires_authentication() {
    let app = TestApp::new();
    let (_, u1) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;
    app.quizzes.create(Some(&u1), mixed_quiz("quiz-1")).await.unwrap();

    let err = app
        .scores
        .submit(None, "quiz-1", &HashMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_unknown_quiz_is_not_found() {
    let app = TestApp::new();
    let (_, u1) = app
        .register_and_login("Alice", "alice@example.com", "secret1")
        .await;

    let err = app
        .scores
        .submit(Some(&u1), "missing", &HashMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
