//! Actions subject to access control.

use std::fmt;

/// What the caller is trying to do to the target resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read the resource in full, corrections included.
    Read,
    /// Modify the resource.
    Update,
    /// Remove the resource.
    Delete,
    /// Change an identity's role.
    Promote,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Promote => "promote",
        };
        write!(f, "{name}")
    }
}
