//! User identity entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{Identity, IdentityPatch};
pub use role::Role;
