//! Dashmap-backed store implementations for single-node deployments.

pub mod category;
pub mod identity;
pub mod quiz;
pub mod session;

pub use category::MemoryCategoryStore;
pub use identity::MemoryIdentityStore;
pub use quiz::MemoryQuizStore;
pub use session::MemorySessionStore;
