//! Session attribute bag stored under an opaque session id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The small attribute bag a session id maps to.
///
/// A record without a `user_id` is an anonymous session. The bag is
/// ephemeral; destroying the session drops it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// The authenticated identity, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// When this record was created. Regeneration resets it.
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a fresh anonymous record.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a record bound to an identity.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            created_at: Utc::now(),
        }
    }

    /// Whether this session carries no identity.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}
