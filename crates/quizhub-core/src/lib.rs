//! # quizhub-core
//!
//! Core crate for QuizHub. Contains configuration schemas, the unified
//! error system, and the text-normalization helpers shared by the
//! ownership and category logic.
//!
//! This crate has **no** internal dependencies on other QuizHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
