//! Quiz scoring.

pub mod service;

pub use service::{AnswerValue, ScoreOutcome, ScoreService};
