//! Quiz CRUD.

pub mod service;

pub use service::{QuizContent, QuizDraft, QuizService, QuizSummary, UpdateQuizDraft};
