//! # quizhub-store
//!
//! Store contracts and their in-memory implementations.
//!
//! The traits are the only storage surface the rest of the system sees;
//! the session backend and the persistence engine are swappable behind
//! them. The shipped implementations are dashmap-backed and suitable
//! for single-node deployments and tests. Mutations touch one record at
//! a time, so concurrent writers to different records never race on a
//! whole-collection rewrite.

pub mod memory;
pub mod traits;

pub use memory::{MemoryCategoryStore, MemoryIdentityStore, MemoryQuizStore, MemorySessionStore};
pub use traits::{CategoryStore, IdentityStore, QuizStore, SessionStore};
