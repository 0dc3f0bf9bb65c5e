//! Access policy evaluation.

pub mod action;
pub mod decision;
pub mod evaluator;

pub use action::Action;
pub use decision::{Decision, DenyReason};
pub use evaluator::PolicyEvaluator;
