//! Account lifecycle: registration, login, credential changes.

pub mod service;

pub use service::{AccountService, RegisterRequest};
