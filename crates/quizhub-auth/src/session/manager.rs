//! Session lifecycle: establishing on login, terminating on logout.

use std::sync::Arc;

use tracing::info;

use quizhub_core::result::AppResult;
use quizhub_entity::session::SessionRecord;
use quizhub_store::traits::SessionStore;

/// Drives session lifecycle transitions against the session store.
#[derive(Clone)]
pub struct SessionManager {
    /// Session store.
    sessions: Arc<dyn SessionStore>,
}

impl SessionManager {
    /// Creates a new manager.
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Binds a session to an identity after successful authentication.
    ///
    /// The id is regenerated first, then the fresh record gets the
    /// `userId`. Both steps complete before the new id is returned, so
    /// no response can reference a half-established session.
    pub async fn establish(&self, session_id: &str, user_id: &str) -> AppResult<String> {
        let new_id = self.sessions.regenerate(session_id).await?;
        self.sessions
            .set(&new_id, SessionRecord::for_user(user_id))
            .await?;
        info!(user_id = %user_id, "Session established");
        Ok(new_id)
    }

    /// Destroys a session on logout, account deletion, or self-demotion.
    pub async fn terminate(&self, session_id: &str) -> AppResult<()> {
        self.sessions.destroy(session_id).await?;
        info!("Session terminated");
        Ok(())
    }
}
