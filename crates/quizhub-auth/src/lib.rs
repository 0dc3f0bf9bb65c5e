//! # quizhub-auth
//!
//! Authentication and authorization core for QuizHub.
//!
//! ## Modules
//!
//! - `principal` — the resolved identity acting in the current request
//! - `session` — session-id resolution and session lifecycle
//! - `policy` — the access policy evaluator (admin bypass, ownership scan)
//! - `password` — Argon2id password hashing and policy enforcement

pub mod password;
pub mod policy;
pub mod principal;
pub mod session;

pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{Action, Decision, DenyReason, PolicyEvaluator};
pub use principal::Principal;
pub use session::{SessionManager, SessionResolver};
