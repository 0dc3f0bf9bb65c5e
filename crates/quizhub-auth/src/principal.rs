//! The resolved identity acting in the current request.

use quizhub_entity::user::{Identity, Role};

/// The identity attempting an action in the current request.
///
/// Built once per request from the session's `userId` and the identity
/// record; never cached across requests, so role and ownership changes
/// take effect on the very next request. Carries only what
/// authorization needs — the password hash stays behind the resolver
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Identity id.
    pub id: String,
    /// Email, used only as an ownership-matching fallback.
    pub email: String,
    /// Resolved role.
    pub role: Role,
}

impl Principal {
    /// Returns whether this principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&Identity> for Principal {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            role: identity.role,
        }
    }
}
