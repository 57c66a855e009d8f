//! # Mutation Audit Records
//!
//! Each successful admin mutation appends a [`MutationRecord`] to the
//! registry's ordered log: who acted, what changed, and when. The decision
//! engine never reads the log; it exists for the embedding host's audit
//! trail.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use gatelist_core::{Address, ListAssignment, TransferlistId};

// ─── Timestamp ───────────────────────────────────────────────────────

/// A UTC timestamp, truncated to seconds precision.
///
/// Sub-second components are dropped at construction so serialized records
/// are stable across hosts that store timestamps at second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(0))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(0))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

// ─── Mutation Records ────────────────────────────────────────────────

/// What a successful admin mutation changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    /// Admin identity replaced.
    AdminChanged {
        /// The new admin.
        new_admin: Address,
    },
    /// Principal added to the superuser set (idempotent).
    SuperuserAdded {
        /// The principal granted superuser status.
        user: Address,
    },
    /// Principal removed from the superuser set (idempotent).
    SuperuserRemoved {
        /// The principal whose superuser status was revoked.
        user: Address,
    },
    /// A single user entry set or cleared.
    UserUpdated {
        /// The principal whose entry changed.
        user: Address,
        /// The assignment written.
        assignment: ListAssignment,
    },
    /// A batch of user entries applied in order.
    UsersUpdated {
        /// Number of pairs in the batch.
        count: usize,
    },
    /// A transfer-list record created or replaced wholesale.
    TransferlistUpdated {
        /// The record's id.
        id: TransferlistId,
    },
    /// A transfer-list record removed (idempotent).
    TransferlistRemoved {
        /// The removed id.
        id: TransferlistId,
    },
}

/// One entry in the registry's mutation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// The admin that performed the mutation.
    pub actor: Address,
    /// What changed.
    pub kind: MutationKind,
    /// When the mutation was applied.
    pub at: Timestamp,
}
