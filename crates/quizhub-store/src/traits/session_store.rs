//! Session store contract.

use async_trait::async_trait;

use quizhub_core::result::AppResult;
use quizhub_entity::session::SessionRecord;

/// Key-value session storage keyed by an opaque session id.
///
/// The backend (in-memory, SQLite, other) is an implementation detail;
/// the core only relies on these four operations.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Returns the attribute bag for a session id, or `None` if the
    /// session does not exist or has expired.
    async fn get(&self, session_id: &str) -> AppResult<Option<SessionRecord>>;

    /// Stores the attribute bag under the session id, replacing any
    /// previous value.
    async fn set(&self, session_id: &str, record: SessionRecord) -> AppResult<()>;

    /// Rotates the session id: the old id is destroyed and a fresh
    /// anonymous record is persisted under a new id, which is returned.
    /// Nothing carries over unless the caller re-sets it. The new id is
    /// durable before this returns.
    async fn regenerate(&self, session_id: &str) -> AppResult<String>;

    /// Destroys the session. Destroying an unknown id is not an error.
    async fn destroy(&self, session_id: &str) -> AppResult<()>;
}
