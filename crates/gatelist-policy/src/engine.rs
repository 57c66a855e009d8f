//! # Authorization Queries
//!
//! The three queries of the policy surface, plus the single-receiver
//! convenience form. All of them are pure reads over a [`PolicyStore`]
//! snapshot and all of them are total: every input produces either `Ok(())`
//! or one [`Refusal`].
//!
//! ## Ordering
//!
//! Evaluation is strictly ordered and stops at the first failing check.
//! Receivers are checked in sequence order. Transfers walk the batch in
//! order, fully resolving each source before any of its destinations, and
//! destinations in order within a pair. The structural list query runs its
//! five checks in a fixed order. Whatever fails first is the refusal the
//! caller sees; nothing after it is evaluated.
//!
//! ## Privilege
//!
//! [`Privilege`] is decided once per transfer query from the caller's
//! superuser membership. The privileged mode changes exactly two things:
//! the allowed-list containment check is skipped, and a missing entry is
//! reported as not-whitelisted instead of restricted. Restriction state
//! blocks both modes identically, source before destination, so a
//! restricted source always reports as restricted no matter who asks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use gatelist_core::{Address, Refusal, TransferlistId};
use gatelist_registry::PolicyStore;

use crate::status::{resolve, Resolution};

// ─── Privilege ───────────────────────────────────────────────────────

/// The caller mode for [`assert_transfers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Ordinary caller: full policy, including the allowed-list graph.
    Standard,
    /// Superuser caller: exempt from the allowed-list graph, still subject
    /// to whitelisting and restriction.
    Super,
}

impl Privilege {
    /// Decide the caller's mode from the store's superuser set.
    pub fn of<S: PolicyStore>(store: &S, caller: &Address) -> Self {
        if store.is_superuser(caller) {
            Self::Super
        } else {
            Self::Standard
        }
    }
}

// ─── Transfer Batch Input ────────────────────────────────────────────

/// One proposed movement: a source and its destinations, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferIntent {
    /// The sending principal.
    pub from: Address,
    /// The receiving principals, checked in order.
    pub to: Vec<Address>,
}

impl TransferIntent {
    /// Build an intent from a source and its destinations.
    pub fn new(from: Address, to: impl IntoIterator<Item = Address>) -> Self {
        Self {
            from,
            to: to.into_iter().collect(),
        }
    }
}

// ─── Queries ─────────────────────────────────────────────────────────

/// May every one of `addrs` receive value at all?
///
/// Fails with `USER_RESTRICTED` at the first address that is absent,
/// unassigned, or on a missing or restricted list. The allowed-list graph
/// plays no part here.
pub fn assert_receivers<S: PolicyStore>(store: &S, addrs: &[Address]) -> Result<(), Refusal> {
    for addr in addrs {
        if let Resolution::NotFound | Resolution::Restricted = resolve(store, addr) {
            return Err(refuse(Refusal::UserRestricted { address: addr.clone() }));
        }
    }
    Ok(())
}

/// Single-receiver form of [`assert_receivers`].
pub fn assert_receiver<S: PolicyStore>(store: &S, addr: &Address) -> Result<(), Refusal> {
    assert_receivers(store, std::slice::from_ref(addr))
}

/// May this batch of transfers proceed, given who is asking?
///
/// Walks the batch in order. For each intent the source resolves first:
/// restricted fails `FROM_RESTRICTED` in both caller modes, and a missing
/// entry fails `FROM_RESTRICTED` for a standard caller or
/// `FROM_NOT_WHITELISTED` for a superuser. With an unrestricted source,
/// each destination resolves in order: restricted fails `TO_RESTRICTED` in
/// both modes, a missing entry fails `TO_RESTRICTED` or
/// `TO_NOT_WHITELISTED` by mode, and an unrestricted destination must
/// additionally sit in the source list's allowed set unless the caller is a
/// superuser, else `TO_NOT_ALLOWED`.
pub fn assert_transfers<S: PolicyStore>(
    store: &S,
    caller: &Address,
    batch: &[TransferIntent],
) -> Result<(), Refusal> {
    let privilege = Privilege::of(store, caller);
    for intent in batch {
        let (from_list, from_record) = match resolve(store, &intent.from) {
            Resolution::Restricted => {
                return Err(refuse(Refusal::FromRestricted { from: intent.from.clone() }));
            }
            Resolution::NotFound => {
                let refusal = match privilege {
                    Privilege::Standard => Refusal::FromRestricted { from: intent.from.clone() },
                    Privilege::Super => Refusal::FromNotWhitelisted { from: intent.from.clone() },
                };
                return Err(refuse(refusal));
            }
            Resolution::Member { id, record } => (id, record),
        };

        for to in &intent.to {
            match resolve(store, to) {
                Resolution::Restricted => {
                    return Err(refuse(Refusal::ToRestricted { to: to.clone() }));
                }
                Resolution::NotFound => {
                    let refusal = match privilege {
                        Privilege::Standard => Refusal::ToRestricted { to: to.clone() },
                        Privilege::Super => Refusal::ToNotWhitelisted { to: to.clone() },
                    };
                    return Err(refuse(refusal));
                }
                Resolution::Member { id: to_list, .. } => {
                    if privilege == Privilege::Standard && !from_record.allows(to_list) {
                        return Err(refuse(Refusal::ToNotAllowed { from_list, to_list }));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Is the `from_id → to_id` edge structurally valid, independent of any
/// principal?
///
/// The five checks run in order: source record exists, destination record
/// exists, source unrestricted, destination unrestricted, destination in
/// the source's allowed set.
pub fn assert_transferlist<S: PolicyStore>(
    store: &S,
    from_id: TransferlistId,
    to_id: TransferlistId,
) -> Result<(), Refusal> {
    let from_record = store
        .transferlist(from_id)
        .ok_or_else(|| refuse(Refusal::FromTransferlistNotFound { from_list: from_id }))?;
    let to_record = store
        .transferlist(to_id)
        .ok_or_else(|| refuse(Refusal::ToTransferlistNotFound { to_list: to_id }))?;
    if !from_record.unrestricted {
        return Err(refuse(Refusal::FromInvalidUnrestrictedState { from_list: from_id }));
    }
    if !to_record.unrestricted {
        return Err(refuse(Refusal::ToInvalidUnrestrictedState { to_list: to_id }));
    }
    if !from_record.allows(to_id) {
        return Err(refuse(Refusal::ToTransferlistNotFoundInFrom {
            from_list: from_id,
            to_list: to_id,
        }));
    }
    Ok(())
}

/// Trace the refusal on its way out.
fn refuse(refusal: Refusal) -> Refusal {
    debug!(code = refusal.code(), %refusal, "query refused");
    refusal
}
