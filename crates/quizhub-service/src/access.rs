//! Mapping from policy decisions to the error surface.

use quizhub_auth::policy::{Decision, DenyReason};
use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;

/// Converts a denial into the matching application error; an allow
/// passes through so the caller can read its post-conditions.
///
/// The hosting layer maps these kinds onto HTTP statuses: 401 for
/// `Authentication`, 403 for `Authorization`.
pub fn ensure_allowed(decision: Decision) -> AppResult<Decision> {
    match decision {
        Decision::Allow { .. } => Ok(decision),
        Decision::Deny(DenyReason::Unauthenticated) => {
            Err(AppError::authentication("Authentication required"))
        }
        Decision::Deny(DenyReason::NotOwner) => {
            Err(AppError::authorization("You do not own this resource"))
        }
        Decision::Deny(DenyReason::RoleInsufficient) => {
            Err(AppError::authorization("Administrator role required"))
        }
    }
}
