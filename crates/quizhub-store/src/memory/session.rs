//! In-memory session store for single-node deployments.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use quizhub_core::config::session::SessionConfig;
use quizhub_core::result::AppResult;
use quizhub_entity::session::SessionRecord;

use crate::traits::SessionStore;

/// In-memory session store.
///
/// Records past the configured absolute lifetime read back as absent
/// and are dropped on access.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    /// Session id to attribute bag.
    sessions: Arc<DashMap<String, SessionRecord>>,
    /// Session configuration.
    config: SessionConfig,
}

impl MemorySessionStore {
    /// Creates a new store with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    fn is_expired(&self, record: &SessionRecord) -> bool {
        let lifetime = Duration::hours(self.config.absolute_timeout_hours as i64);
        record.created_at + lifetime <= Utc::now()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        if let Some(record) = self.sessions.get(session_id) {
            if self.is_expired(&record) {
                drop(record);
                self.sessions.remove(session_id);
                debug!(session_id = %session_id, "Expired session dropped on access");
                return Ok(None);
            }
            return Ok(Some(record.clone()));
        }
        Ok(None)
    }

    async fn set(&self, session_id: &str, record: SessionRecord) -> AppResult<()> {
        self.sessions.insert(session_id.to_string(), record);
        Ok(())
    }

    async fn regenerate(&self, session_id: &str) -> AppResult<String> {
        self.sessions.remove(session_id);
        let new_id = Uuid::new_v4().to_string();
        self.sessions
            .insert(new_id.clone(), SessionRecord::anonymous());
        debug!(old = %session_id, new = %new_id, "Session id rotated");
        Ok(new_id)
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.sessions.remove(session_id);
        debug!(session_id = %session_id, "Session destroyed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_regenerate_carries_nothing_over() {
        let store = MemorySessionStore::default();
        store
            .set("old", SessionRecord::for_user("u1"))
            .await
            .unwrap();

        let new_id = store.regenerate("old").await.unwrap();
        assert!(store.get("old").await.unwrap().is_none());

        let record = store.get(&new_id).await.unwrap().unwrap();
        assert!(record.is_anonymous());
    }

    #[tokio::test]
    async fn test_expired_record_reads_back_absent() {
        let store = MemorySessionStore::new(SessionConfig {
            absolute_timeout_hours: 1,
            ..SessionConfig::default()
        });
        let stale = SessionRecord {
            user_id: Some("u1".into()),
            created_at: Utc::now() - Duration::hours(2),
        };
        store.set("sid", stale).await.unwrap();
        assert!(store.get("sid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_destroy_unknown_id_is_not_an_error() {
        let store = MemorySessionStore::default();
        store.destroy("missing").await.unwrap();
    }
}
