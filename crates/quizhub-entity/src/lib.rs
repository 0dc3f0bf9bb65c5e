//! # quizhub-entity
//!
//! Domain entity models for QuizHub: identities and roles, quizzes with
//! their historically inconsistent ownership fields, categories, and the
//! session attribute bag.

pub mod category;
pub mod quiz;
pub mod session;
pub mod user;

pub use category::Category;
pub use quiz::{Owner, OwnerCandidates, Question, QuestionKind, Quiz, QuizView};
pub use session::SessionRecord;
pub use user::{Identity, IdentityPatch, Role};
