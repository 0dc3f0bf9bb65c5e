//! Quiz entity, questions, and ownership resolution.

pub mod model;
pub mod owner;
pub mod question;

pub use model::{Quiz, QuizView};
pub use owner::{Owner, OwnerCandidates};
pub use question::{Choice, Question, QuestionKind, QuestionView};
