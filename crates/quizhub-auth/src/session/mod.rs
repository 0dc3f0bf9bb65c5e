//! Session resolution and lifecycle.

pub mod manager;
pub mod resolver;

pub use manager::SessionManager;
pub use resolver::SessionResolver;
