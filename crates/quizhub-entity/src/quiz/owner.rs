//! Ownership resolution across historically inconsistent owner fields.
//!
//! The quiz owner reference was renamed several times without a data
//! migration, so stored records may carry the owner under any of
//! `ownerId`, `auteurId`, `createdBy`, or `userId`, and a few very old
//! records only carry `ownerEmail`. Every historical name is equally
//! authoritative on the read side; new records are written with the
//! canonical `ownerId` only.

use quizhub_core::types::{fold_email, fold_id};
use serde::{Deserialize, Serialize};

/// A single owner reference extracted from a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Owner {
    /// Owner referenced by identity id.
    ById(String),
    /// Owner referenced by email. Legacy fallback only.
    ByEmail(String),
}

/// The ordered list of owner references a record carries.
///
/// Candidates are collected at load time in fixed priority order; call
/// sites match against the whole list instead of repeating per-field
/// `if` chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerCandidates {
    candidates: Vec<Owner>,
}

impl OwnerCandidates {
    /// Builds the candidate list from the legacy field values, in
    /// priority order. Blank values are skipped. The email fallback is
    /// recorded only when no id-bearing field is present.
    pub fn from_fields(
        owner_id: Option<&str>,
        auteur_id: Option<&str>,
        created_by: Option<&str>,
        user_id: Option<&str>,
        owner_email: Option<&str>,
    ) -> Self {
        let mut candidates: Vec<Owner> = [owner_id, auteur_id, created_by, user_id]
            .into_iter()
            .flatten()
            .filter(|v| !v.trim().is_empty())
            .map(|v| Owner::ById(v.to_string()))
            .collect();

        if candidates.is_empty() {
            if let Some(email) = owner_email {
                if !email.trim().is_empty() {
                    candidates.push(Owner::ByEmail(email.to_string()));
                }
            }
        }

        Self { candidates }
    }

    /// Whether the record carries no owner reference at all.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The highest-priority owner reference, if any.
    pub fn primary(&self) -> Option<&Owner> {
        self.candidates.first()
    }

    /// Iterates candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Owner> {
        self.candidates.iter()
    }

    /// Checks whether the given principal id or email matches any
    /// candidate. Ids compare string-normalized (trimmed), emails
    /// case-insensitively.
    pub fn matches(&self, principal_id: &str, principal_email: &str) -> bool {
        self.candidates.iter().any(|owner| match owner {
            Owner::ById(id) => fold_id(id) == fold_id(principal_id),
            Owner::ByEmail(email) => fold_email(email) == fold_email(principal_email),
        })
    }
}
