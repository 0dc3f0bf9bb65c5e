//! Maps an inbound session id to a request-scoped principal.

use std::sync::Arc;

use tracing::warn;

use quizhub_store::traits::{IdentityStore, SessionStore};

use crate::principal::Principal;

/// Resolves a session id to the principal acting on the request.
///
/// Resolution is read-only and never fails the request: an unknown
/// session, a blank `userId`, a deleted identity, or a store failure
/// all resolve to anonymous and let downstream authorization reject as
/// unauthenticated instead of crashing.
#[derive(Clone)]
pub struct SessionResolver {
    /// Session store.
    sessions: Arc<dyn SessionStore>,
    /// Identity store.
    identities: Arc<dyn IdentityStore>,
}

impl SessionResolver {
    /// Creates a new resolver.
    pub fn new(sessions: Arc<dyn SessionStore>, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            sessions,
            identities,
        }
    }

    /// Resolves the principal for a session id, or `None` for anonymous.
    ///
    /// The principal is rebuilt from the identity store on every call,
    /// so role changes and deletions take effect immediately.
    pub async fn resolve(&self, session_id: &str) -> Option<Principal> {
        let record = match self.sessions.get(session_id).await {
            Ok(record) => record?,
            Err(e) => {
                warn!(error = %e, "Session lookup failed; resolving anonymous");
                return None;
            }
        };

        let user_id = record.user_id?;
        if user_id.trim().is_empty() {
            return None;
        }

        match self.identities.find_by_id(&user_id).await {
            Ok(Some(identity)) => Some(Principal::from(&identity)),
            // Identity deleted after the session was issued.
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, user_id = %user_id, "Identity lookup failed; resolving anonymous");
                None
            }
        }
    }
}
