//! User identity entity model.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A registered identity in the QuizHub system.
///
/// The wire shape follows the legacy `users.json` records: camelCase
/// field names, the password hash stored under `password`, and `role`
/// and `points` optional on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier. Immutable once assigned, never reused.
    pub id: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Email address. Unique case-insensitively among live identities.
    pub email: String,
    /// Password hash. Never serialized; it must not cross the auth boundary.
    #[serde(default, alias = "password", skip_serializing)]
    pub password_hash: String,
    /// Account role. Records written before roles existed resolve to `user`.
    #[serde(default)]
    pub role: Role,
    /// Accumulated quiz points. Adjusted only by additive deltas.
    #[serde(default)]
    pub points: u64,
}

impl Identity {
    /// Check if this identity has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Field-level patch for updating an existing identity.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPatch {
    /// New display name.
    pub display_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role.
    pub role: Option<Role>,
}
