//! # Refusal Taxonomy
//!
//! Every way the policy surface can say "no", as typed error values. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Mutations fail only with [`AdminError::InvalidCaller`], and a failed
//!   mutation applies nothing.
//! - Queries fail with a [`Refusal`] naming the first check that did not
//!   hold; evaluation stops at that check, so the refusal identifies one
//!   offending principal or list.
//! - `Display` output leads with the stable SCREAMING_SNAKE policy code
//!   followed by the offending identifiers. [`Refusal::code()`] returns the
//!   bare code for wire surfaces that match on strings.
//! - Every refusal is a deterministic function of registry state and query
//!   input. Nothing here is transient; retrying without a mutation in
//!   between returns the identical refusal.

use thiserror::Error;

use crate::address::Address;
use crate::list::TransferlistId;

// ─── Mutation Errors ─────────────────────────────────────────────────

/// Errors from the admin mutation surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// The caller is not the current admin. No mutation was applied.
    #[error("INVALID_CALLER: {caller}")]
    InvalidCaller {
        /// The principal that attempted the mutation.
        caller: Address,
    },
}

// ─── Query Refusals ──────────────────────────────────────────────────

/// A policy refusal from one of the authorization queries.
///
/// Variants carry the identifiers the failing check was looking at. The
/// receiver query reports `UserRestricted` for any non-transferable
/// address; the transfer query distinguishes source from destination and,
/// for privileged callers, restriction from absence; the structural list
/// query reports which of its five ordered checks failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// A receiver is absent, unassigned, or on a restricted list.
    #[error("USER_RESTRICTED: {address}")]
    UserRestricted {
        /// The first offending address in the queried sequence.
        address: Address,
    },

    /// The transfer source is blocked (restricted list, or no usable entry
    /// for a standard caller).
    #[error("FROM_RESTRICTED: {from}")]
    FromRestricted {
        /// The source principal.
        from: Address,
    },

    /// A transfer destination is blocked (restricted list, or no usable
    /// entry for a standard caller).
    #[error("TO_RESTRICTED: {to}")]
    ToRestricted {
        /// The destination principal.
        to: Address,
    },

    /// Privileged-caller variant of a source with no usable entry.
    #[error("FROM_NOT_WHITELISTED: {from}")]
    FromNotWhitelisted {
        /// The source principal.
        from: Address,
    },

    /// Privileged-caller variant of a destination with no usable entry.
    #[error("TO_NOT_WHITELISTED: {to}")]
    ToNotWhitelisted {
        /// The destination principal.
        to: Address,
    },

    /// Both ends are unrestricted but the destination's list is not in the
    /// source list's allowed set, and the caller is not privileged.
    #[error("TO_NOT_ALLOWED: {to_list} not reachable from {from_list}")]
    ToNotAllowed {
        /// The source principal's list.
        from_list: TransferlistId,
        /// The destination principal's list.
        to_list: TransferlistId,
    },

    /// The queried source list has no record.
    #[error("FROM_TRANSFERLIST_NOT_FOUND: {from_list}")]
    FromTransferlistNotFound {
        /// The missing list id.
        from_list: TransferlistId,
    },

    /// The queried destination list has no record.
    #[error("TO_TRANSFERLIST_NOT_FOUND: {to_list}")]
    ToTransferlistNotFound {
        /// The missing list id.
        to_list: TransferlistId,
    },

    /// The queried source list exists but is marked restricted.
    #[error("FROM_INVALID_UNRESTRICTED_STATE: {from_list}")]
    FromInvalidUnrestrictedState {
        /// The restricted list id.
        from_list: TransferlistId,
    },

    /// The queried destination list exists but is marked restricted.
    #[error("TO_INVALID_UNRESTRICTED_STATE: {to_list}")]
    ToInvalidUnrestrictedState {
        /// The restricted list id.
        to_list: TransferlistId,
    },

    /// The destination list id is not in the source list's allowed set.
    #[error("TO_TRANSFERLIST_NOT_FOUND_IN_FROM: {to_list} not in allowed set of {from_list}")]
    ToTransferlistNotFoundInFrom {
        /// The source list id.
        from_list: TransferlistId,
        /// The destination list id.
        to_list: TransferlistId,
    },
}

impl Refusal {
    /// The stable policy code for this refusal.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserRestricted { .. } => "USER_RESTRICTED",
            Self::FromRestricted { .. } => "FROM_RESTRICTED",
            Self::ToRestricted { .. } => "TO_RESTRICTED",
            Self::FromNotWhitelisted { .. } => "FROM_NOT_WHITELISTED",
            Self::ToNotWhitelisted { .. } => "TO_NOT_WHITELISTED",
            Self::ToNotAllowed { .. } => "TO_NOT_ALLOWED",
            Self::FromTransferlistNotFound { .. } => "FROM_TRANSFERLIST_NOT_FOUND",
            Self::ToTransferlistNotFound { .. } => "TO_TRANSFERLIST_NOT_FOUND",
            Self::FromInvalidUnrestrictedState { .. } => "FROM_INVALID_UNRESTRICTED_STATE",
            Self::ToInvalidUnrestrictedState { .. } => "TO_INVALID_UNRESTRICTED_STATE",
            Self::ToTransferlistNotFoundInFrom { .. } => "TO_TRANSFERLIST_NOT_FOUND_IN_FROM",
        }
    }
}
