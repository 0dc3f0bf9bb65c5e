//! Shared plain types and helpers.

pub mod normalize;

pub use normalize::{fold, fold_email, fold_id};
