//! Session attribute bag entity.

pub mod model;

pub use model::SessionRecord;
