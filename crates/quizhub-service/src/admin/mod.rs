//! Admin user management.

pub mod service;

pub(crate) use service::admin_count;
pub use service::{AdminService, UserSummary};
