//! Account self-service operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use quizhub_auth::password::{PasswordHasher, PasswordValidator};
use quizhub_auth::principal::Principal;
use quizhub_auth::session::SessionManager;
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_entity::user::{Identity, Role};
use quizhub_store::traits::IdentityStore;

use crate::admin::admin_count;

/// Handles registration, login/logout, and credential changes.
///
/// Credential changes re-verify the current password for every role;
/// admin bypass applies to resource ownership, never to credentials.
#[derive(Clone)]
pub struct AccountService {
    /// Identity store.
    identities: Arc<dyn IdentityStore>,
    /// Session lifecycle.
    sessions: SessionManager,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

/// Data required to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Must match `password`.
    pub password_confirm: String,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        sessions: SessionManager,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            identities,
            sessions,
            hasher,
            validator,
        }
    }

    /// Registers a new account with the `user` role and zero points.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<Identity> {
        if req.display_name.trim().is_empty() {
            return Err(AppError::validation("Display name is required"));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&req.password)?;
        if req.password != req.password_confirm {
            return Err(AppError::validation("Passwords do not match"));
        }

        if self.identities.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email is already in use"));
        }

        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            display_name: req.display_name.trim().to_string(),
            email: req.email.trim().to_string(),
            password_hash: self.hasher.hash_password(&req.password)?,
            role: Role::User,
            points: 0,
        };

        let created = self.identities.insert(identity).await?;
        info!(user_id = %created.id, "Account registered");
        Ok(created)
    }

    /// Authenticates and binds the session to the identity.
    ///
    /// Returns the rotated session id and the resolved principal. The
    /// error message is identical for unknown email and wrong password.
    pub async fn login(
        &self,
        session_id: &str,
        email: &str,
        password: &str,
    ) -> AppResult<(String, Principal)> {
        let identity = self
            .identities
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if !self
            .hasher
            .verify_password(password, &identity.password_hash)?
        {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let new_session_id = self.sessions.establish(session_id, &identity.id).await?;
        info!(user_id = %identity.id, "Login succeeded");
        Ok((new_session_id, Principal::from(&identity)))
    }

    /// Destroys the session.
    pub async fn logout(&self, session_id: &str) -> AppResult<()> {
        self.sessions.terminate(session_id).await
    }

    /// Changes the caller's password after re-verifying the current one.
    pub async fn change_password(
        &self,
        principal: &Principal,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let identity = self
            .identities
            .find_by_id(&principal.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self
            .hasher
            .verify_password(current_password, &identity.password_hash)?
        {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.identities
            .set_password_hash(&principal.id, &new_hash)
            .await?;

        info!(user_id = %principal.id, "Password changed");
        Ok(())
    }

    /// Deletes the caller's account after re-verifying the current
    /// password, and terminates the session.
    ///
    /// The last remaining admin cannot delete their own account.
    pub async fn delete_account(
        &self,
        principal: &Principal,
        current_password: &str,
        session_id: &str,
    ) -> AppResult<()> {
        let identity = self
            .identities
            .find_by_id(&principal.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self
            .hasher
            .verify_password(current_password, &identity.password_hash)?
        {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        if identity.is_admin() && admin_count(self.identities.as_ref()).await? <= 1 {
            return Err(AppError::conflict(
                "Cannot delete the last administrator account",
            ));
        }

        self.identities.delete(&principal.id).await?;
        self.sessions.terminate(session_id).await?;

        info!(user_id = %principal.id, "Account deleted");
        Ok(())
    }
}
