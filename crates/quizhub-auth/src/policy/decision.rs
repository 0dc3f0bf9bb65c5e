//! Policy decision values.

use std::fmt;

/// Why an action was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// No resolvable principal on the request.
    Unauthenticated,
    /// A principal exists but matches none of the target's owner fields.
    NotOwner,
    /// The action requires a role the principal does not hold.
    RoleInsufficient,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::NotOwner => "not_owner",
            Self::RoleInsufficient => "role_insufficient",
        };
        write!(f, "{name}")
    }
}

/// The outcome of a policy evaluation.
///
/// Denial is a value, not an error; the service layer maps it onto the
/// error surface. `invalidate_session` marks the one allowed action
/// (self-demotion) whose post-condition is terminating the caller's
/// session — the evaluator itself performs no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The action may proceed.
    Allow {
        /// The caller must terminate the acting session after the write.
        invalidate_session: bool,
    },
    /// The action is refused.
    Deny(DenyReason),
}

impl Decision {
    /// Plain allow with no post-condition.
    pub fn allow() -> Self {
        Self::Allow {
            invalidate_session: false,
        }
    }

    /// Allow that obliges the caller to invalidate the acting session.
    pub fn allow_with_invalidation() -> Self {
        Self::Allow {
            invalidate_session: true,
        }
    }

    /// Whether the action may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    /// Whether the caller must terminate the acting session afterwards.
    pub fn requires_session_invalidation(&self) -> bool {
        matches!(
            self,
            Self::Allow {
                invalidate_session: true
            }
        )
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow {
                invalidate_session: false,
            } => write!(f, "allow"),
            Self::Allow {
                invalidate_session: true,
            } => write!(f, "allow+invalidate"),
            Self::Deny(reason) => write!(f, "deny({reason})"),
        }
    }
}
