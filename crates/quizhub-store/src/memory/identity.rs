//! In-memory identity store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use quizhub_core::result::AppResult;
use quizhub_core::types::{fold_email, fold_id};
use quizhub_entity::user::{Identity, IdentityPatch};

use crate::traits::IdentityStore;

/// In-memory identity store keyed by id.
///
/// `update_fields`, `set_password_hash`, and `add_points` mutate the
/// record in place under its map shard lock, so concurrent writers to
/// the same identity cannot lose each other's updates.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    /// Identity id to record.
    identities: Arc<DashMap<String, Identity>>,
}

impl MemoryIdentityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Identity>> {
        Ok(self.identities.get(fold_id(id)).map(|r| r.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        let needle = fold_email(email);
        Ok(self
            .identities
            .iter()
            .find(|entry| fold_email(&entry.email) == needle)
            .map(|entry| entry.clone()))
    }

    async fn insert(&self, identity: Identity) -> AppResult<Identity> {
        self.identities
            .insert(fold_id(&identity.id).to_string(), identity.clone());
        debug!(user_id = %identity.id, "Identity inserted");
        Ok(identity)
    }

    async fn update_fields(&self, id: &str, patch: IdentityPatch) -> AppResult<Option<Identity>> {
        match self.identities.get_mut(fold_id(id)) {
            Some(mut entry) => {
                if let Some(display_name) = patch.display_name {
                    entry.display_name = display_name;
                }
                if let Some(email) = patch.email {
                    entry.email = email;
                }
                if let Some(role) = patch.role {
                    entry.role = role;
                }
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_password_hash(&self, id: &str, hash: &str) -> AppResult<bool> {
        match self.identities.get_mut(fold_id(id)) {
            Some(mut entry) => {
                entry.password_hash = hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_points(&self, id: &str, delta: u64) -> AppResult<Option<Identity>> {
        match self.identities.get_mut(fold_id(id)) {
            Some(mut entry) => {
                entry.points += delta;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.identities.remove(fold_id(id)).is_some();
        if removed {
            debug!(user_id = %id, "Identity deleted");
        }
        Ok(removed)
    }

    async fn list_all(&self) -> AppResult<Vec<Identity>> {
        Ok(self.identities.iter().map(|entry| entry.clone()).collect())
    }
}
