//! # Transfer Lists and Assignments
//!
//! A transfer list is a policy bucket: a restriction flag plus the set of
//! other buckets it may send to. Principals are assigned to at most one
//! list through a [`ListAssignment`].
//!
//! List identifiers are caller-chosen small integers, not auto-assigned.
//! Re-using an identifier overwrites the prior record, and a user entry may
//! reference an identifier that has no record yet: assignment and list
//! creation are independent admin actions, and the dangling reference
//! surfaces at query time as a restricted status rather than being rejected
//! at mutation time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────

/// Identifier of a transfer list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TransferlistId(pub u32);

impl std::fmt::Display for TransferlistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transferlist:{}", self.0)
    }
}

// ─── Transfer-List Record ────────────────────────────────────────────

/// A transfer-list record: the restriction flag and the allowed-destination
/// set.
///
/// When `unrestricted` is `false` the list categorically blocks its members
/// from participating in transfers and the `allowed` set carries no
/// meaning. Updates replace the record wholesale; there is no merge of the
/// allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transferlist {
    /// Whether members of this list may participate in transfers at all.
    pub unrestricted: bool,
    /// Destination lists members may send to. Only meaningful when
    /// `unrestricted` is `true`.
    pub allowed: BTreeSet<TransferlistId>,
}

impl Transferlist {
    /// Create a record from a flag and any iterable of destination ids.
    pub fn new(unrestricted: bool, allowed: impl IntoIterator<Item = TransferlistId>) -> Self {
        Self {
            unrestricted,
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Whether `to` is a permitted destination list.
    pub fn allows(&self, to: TransferlistId) -> bool {
        self.allowed.contains(&to)
    }
}

// ─── List Assignment ─────────────────────────────────────────────────

/// A principal's transfer-list assignment.
///
/// `Unassigned` is a stored state, distinct from the principal being absent
/// from the user map entirely. Both read as "not on any list" for policy
/// purposes; keeping them separate means clearing an assignment leaves an
/// observable entry behind, exactly like the underlying optional-valued
/// store the registry models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListAssignment {
    /// Entry present, no list assigned.
    Unassigned,
    /// Entry present, assigned to the given list.
    Assigned(TransferlistId),
}

impl ListAssignment {
    /// The assigned list id, if any.
    pub fn transferlist(&self) -> Option<TransferlistId> {
        match self {
            Self::Unassigned => None,
            Self::Assigned(id) => Some(*id),
        }
    }

    /// Whether this assignment names a list.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

impl From<Option<TransferlistId>> for ListAssignment {
    fn from(id: Option<TransferlistId>) -> Self {
        match id {
            None => Self::Unassigned,
            Some(id) => Self::Assigned(id),
        }
    }
}
