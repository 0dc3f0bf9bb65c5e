//! Admin user management operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use quizhub_auth::password::{PasswordHasher, PasswordValidator};
use quizhub_auth::policy::PolicyEvaluator;
use quizhub_auth::principal::Principal;
use quizhub_auth::session::SessionManager;
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_core::types::fold_id;
use quizhub_entity::user::{Identity, IdentityPatch, Role};
use quizhub_store::traits::IdentityStore;

use crate::access::ensure_allowed;

/// Counts live admin identities.
///
/// Used by the lockout guards: the system must never be left with zero
/// administrators.
pub(crate) async fn admin_count(identities: &dyn IdentityStore) -> AppResult<usize> {
    Ok(identities
        .list_all()
        .await?
        .iter()
        .filter(|i| i.is_admin())
        .count())
}

/// An identity as listed in the admin panel — no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Identity id.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Accumulated points.
    pub points: u64,
}

impl From<&Identity> for UserSummary {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            display_name: identity.display_name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            points: identity.points,
        }
    }
}

/// Handles admin-only user management.
#[derive(Clone)]
pub struct AdminService {
    /// Identity store.
    identities: Arc<dyn IdentityStore>,
    /// Policy evaluator.
    evaluator: PolicyEvaluator,
    /// Session lifecycle, for the self-demotion post-condition.
    sessions: SessionManager,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        evaluator: PolicyEvaluator,
        sessions: SessionManager,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            identities,
            evaluator,
            sessions,
            hasher,
            validator,
        }
    }

    /// Lists every account, hashes excluded.
    pub async fn list_users(&self, principal: Option<&Principal>) -> AppResult<Vec<UserSummary>> {
        ensure_allowed(self.evaluator.authorize_admin(principal))?;
        let identities = self.identities.list_all().await?;
        Ok(identities.iter().map(UserSummary::from).collect())
    }

    /// Updates a target account's profile fields and role.
    ///
    /// A role change goes through the policy evaluator; when the
    /// decision carries the invalidation post-condition (an admin
    /// demoting themself), the acting session is terminated after the
    /// write so the demoted actor cannot keep operating on admin-level
    /// session state. Demoting the last admin is a conflict.
    pub async fn update_user(
        &self,
        principal: Option<&Principal>,
        session_id: &str,
        target_id: &str,
        patch: IdentityPatch,
    ) -> AppResult<Identity> {
        ensure_allowed(self.evaluator.authorize_admin(principal))?;

        let target = self
            .identities
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(email) = &patch.email {
            if let Some(existing) = self.identities.find_by_email(email).await? {
                if fold_id(&existing.id) != fold_id(target_id) {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let mut invalidate_session = false;
        if let Some(new_role) = patch.role {
            if new_role != target.role {
                let decision =
                    self.evaluator
                        .authorize_role_change(principal, target_id, new_role);
                invalidate_session = ensure_allowed(decision)?.requires_session_invalidation();

                if target.is_admin()
                    && !new_role.is_admin()
                    && admin_count(self.identities.as_ref()).await? <= 1
                {
                    return Err(AppError::conflict("Cannot demote the last administrator"));
                }
            }
        }

        let updated = self
            .identities
            .update_fields(target_id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(target_id = %target_id, "User updated");

        if invalidate_session {
            self.sessions.terminate(session_id).await?;
            info!(target_id = %target_id, "Acting session invalidated after self-demotion");
        }

        Ok(updated)
    }

    /// Sets a target account's password.
    pub async fn set_user_password(
        &self,
        principal: Option<&Principal>,
        target_id: &str,
        new_password: &str,
    ) -> AppResult<()> {
        ensure_allowed(self.evaluator.authorize_admin(principal))?;
        self.validator.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        if !self.identities.set_password_hash(target_id, &hash).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(target_id = %target_id, "Password set by admin");
        Ok(())
    }

    /// Deletes a target account.
    ///
    /// Deleting the last admin is a conflict. An admin deleting themself
    /// also terminates their session; other users' live sessions need no
    /// cleanup — the resolver degrades them to anonymous once the
    /// identity is gone.
    pub async fn delete_user(
        &self,
        principal: Option<&Principal>,
        session_id: &str,
        target_id: &str,
    ) -> AppResult<()> {
        ensure_allowed(self.evaluator.authorize_admin(principal))?;

        let target = self
            .identities
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if target.is_admin() && admin_count(self.identities.as_ref()).await? <= 1 {
            return Err(AppError::conflict("Cannot delete the last administrator"));
        }

        self.identities.delete(target_id).await?;
        info!(target_id = %target_id, "User deleted");

        let deleting_self = principal
            .map(|p| fold_id(&p.id) == fold_id(target_id))
            .unwrap_or(false);
        if deleting_self {
            self.sessions.terminate(session_id).await?;
        }

        Ok(())
    }
}
