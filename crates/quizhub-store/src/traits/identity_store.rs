//! Identity store contract.

use async_trait::async_trait;

use quizhub_core::result::AppResult;
use quizhub_entity::user::{Identity, IdentityPatch};

/// Persistent storage for user identities.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Finds an identity by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Identity>>;

    /// Finds an identity by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>>;

    /// Inserts a new identity and returns it.
    async fn insert(&self, identity: Identity) -> AppResult<Identity>;

    /// Applies a field patch to an identity. Returns the updated record,
    /// or `None` if the id is unknown.
    async fn update_fields(&self, id: &str, patch: IdentityPatch) -> AppResult<Option<Identity>>;

    /// Replaces the stored password hash. Returns `false` if the id is
    /// unknown.
    async fn set_password_hash(&self, id: &str, hash: &str) -> AppResult<bool>;

    /// Adds a point delta to an identity, atomically per record.
    /// Returns the updated record, or `None` if the id is unknown.
    async fn add_points(&self, id: &str, delta: u64) -> AppResult<Option<Identity>>;

    /// Deletes an identity. Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// Lists every identity.
    async fn list_all(&self) -> AppResult<Vec<Identity>>;
}
