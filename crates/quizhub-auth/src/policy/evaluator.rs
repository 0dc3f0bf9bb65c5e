//! Access policy evaluation — admin bypass and multi-field ownership.

use tracing::trace;

use quizhub_core::types::fold_id;
use quizhub_entity::quiz::OwnerCandidates;
use quizhub_entity::user::Role;

use crate::principal::Principal;

use super::action::Action;
use super::decision::{Decision, DenyReason};

/// Decides whether a principal may perform an action on a target.
///
/// Evaluation is pure and synchronous: the target's owner candidates
/// are extracted before the call and decisions carry their own
/// post-conditions instead of performing side effects.
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an action against an owned resource.
    ///
    /// Rules in order, first match wins:
    /// 1. admins may do anything;
    /// 2. a principal matching any owner candidate may proceed;
    /// 3. otherwise deny — `NotOwner` for a resolved principal,
    ///    `Unauthenticated` for an anonymous request.
    pub fn authorize(
        &self,
        principal: Option<&Principal>,
        target: &OwnerCandidates,
        action: Action,
    ) -> Decision {
        let decision = match principal {
            Some(p) if p.is_admin() => Decision::allow(),
            Some(p) if target.matches(&p.id, &p.email) => Decision::allow(),
            Some(_) => Decision::Deny(DenyReason::NotOwner),
            None => Decision::Deny(DenyReason::Unauthenticated),
        };

        trace!(%action, %decision, "Policy evaluated");
        decision
    }

    /// Evaluates the plain admin gate used by category deletion and
    /// admin user management.
    pub fn authorize_admin(&self, principal: Option<&Principal>) -> Decision {
        match principal {
            Some(p) if p.is_admin() => Decision::allow(),
            Some(_) => Decision::Deny(DenyReason::RoleInsufficient),
            None => Decision::Deny(DenyReason::Unauthenticated),
        }
    }

    /// Evaluates a role change on a target identity.
    ///
    /// Admin-only. An admin demoting themself is allowed, but the
    /// decision obliges the caller to terminate the acting session
    /// afterwards so the demoted actor cannot keep operating on
    /// admin-level session state.
    pub fn authorize_role_change(
        &self,
        principal: Option<&Principal>,
        target_id: &str,
        new_role: Role,
    ) -> Decision {
        match principal {
            Some(p) if p.is_admin() => {
                let is_self = fold_id(&p.id) == fold_id(target_id);
                if is_self && !new_role.is_admin() {
                    Decision::allow_with_invalidation()
                } else {
                    Decision::allow()
                }
            }
            Some(_) => Decision::Deny(DenyReason::RoleInsufficient),
            None => Decision::Deny(DenyReason::Unauthenticated),
        }
    }
}
