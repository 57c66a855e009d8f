//! # Read-Only Store Seam
//!
//! [`PolicyStore`] is the exact set of lookups the decision engine consumes:
//! a principal's list assignment, a transfer-list record by id, and
//! superuser membership. The in-memory [`Registry`](crate::Registry)
//! implements it; an embedding host backed by its own key-value store can
//! implement it directly and the engine never knows the difference.
//!
//! Lookups return owned values. The trait models a key-value fetch, and the
//! records involved are a copy of a small integer or a small set of them.
//!
//! Reads never fail: "not found" is a normal outcome expressed as `None`,
//! consumed by the engine's status resolution.

use gatelist_core::{Address, ListAssignment, Transferlist, TransferlistId};

/// Read-only view of the policy state, as consumed by the decision engine.
pub trait PolicyStore {
    /// The user entry for `addr`: `None` when no entry exists,
    /// `Some(ListAssignment::Unassigned)` when an entry exists without a
    /// list, `Some(ListAssignment::Assigned(id))` otherwise.
    fn user_assignment(&self, addr: &Address) -> Option<ListAssignment>;

    /// The transfer-list record for `id`, if one exists.
    fn transferlist(&self, id: TransferlistId) -> Option<Transferlist>;

    /// Whether `addr` is in the superuser set.
    fn is_superuser(&self, addr: &Address) -> bool;
}
