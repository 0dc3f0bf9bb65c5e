//! Store contracts consumed by the auth and service layers.

pub mod category_store;
pub mod identity_store;
pub mod quiz_store;
pub mod session_store;

pub use category_store::CategoryStore;
pub use identity_store::IdentityStore;
pub use quiz_store::QuizStore;
pub use session_store::SessionStore;
