//! # quizhub-service
//!
//! Business logic service layer for QuizHub. Each service orchestrates
//! stores and the auth core to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every mutation path checks
//! target existence first, then evaluates policy, then mutates; denials
//! surface as explicit errors, never as silent no-ops.

pub mod access;
pub mod account;
pub mod admin;
pub mod category;
pub mod quiz;
pub mod score;

pub use account::AccountService;
pub use admin::{AdminService, UserSummary};
pub use category::CategoryService;
pub use quiz::{QuizContent, QuizDraft, QuizService, QuizSummary, UpdateQuizDraft};
pub use score::{AnswerValue, ScoreOutcome, ScoreService};
