//! # Admin Mutation Surface
//!
//! Every mutation of the registry goes through the operations in this
//! module, and every operation is gated on `caller == admin`. The gate is
//! checked before anything else, so a refused call applies nothing, and a
//! batch is all-or-nothing: the caller check is the only failure mode the
//! surface has.
//!
//! Upserts are idempotent where the model is a set or a wholesale record:
//! adding a present superuser, removing an absent one, or re-writing an
//! identical transfer-list record all succeed and converge to the same
//! state.
//!
//! No operation validates that an assigned transfer-list id has a record.
//! Assignment and list creation are independent actions; a dangling id
//! reads as restricted at query time.

use tracing::debug;

use gatelist_core::{AdminError, Address, ListAssignment, Transferlist, TransferlistId};

use crate::audit::{MutationKind, MutationRecord, Timestamp};
use crate::registry::Registry;

impl Registry {
    /// Replace the admin identifier unconditionally.
    ///
    /// The current admin may hand the registry to any principal, including
    /// itself. After the call only `new_admin` can mutate.
    pub fn set_admin(&mut self, caller: &Address, new_admin: Address) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        debug!(actor = %caller, new_admin = %new_admin, "admin reassigned");
        self.admin = new_admin.clone();
        self.record(caller, MutationKind::AdminChanged { new_admin });
        Ok(())
    }

    /// Add a principal to the superuser set. Adding a present principal
    /// succeeds silently.
    pub fn add_superuser(&mut self, caller: &Address, user: Address) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        debug!(actor = %caller, user = %user, "superuser added");
        self.superusers.insert(user.clone());
        self.record(caller, MutationKind::SuperuserAdded { user });
        Ok(())
    }

    /// Remove a principal from the superuser set. Removing an absent
    /// principal succeeds silently.
    pub fn remove_superuser(&mut self, caller: &Address, user: Address) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        debug!(actor = %caller, user = %user, "superuser removed");
        self.superusers.remove(&user);
        self.record(caller, MutationKind::SuperuserRemoved { user });
        Ok(())
    }

    /// Set or clear the user entry for a principal.
    ///
    /// `ListAssignment::Unassigned` writes an entry with no list, which is
    /// distinct from the principal having no entry at all. The assigned id
    /// is not checked against the transfer-list table.
    pub fn update_user(
        &mut self,
        caller: &Address,
        user: Address,
        assignment: impl Into<ListAssignment>,
    ) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        let assignment = assignment.into();
        debug!(actor = %caller, user = %user, ?assignment, "user updated");
        self.users.insert(user.clone(), assignment);
        self.record(caller, MutationKind::UserUpdated { user, assignment });
        Ok(())
    }

    /// Apply a batch of user updates in order.
    ///
    /// A later pair for the same principal overrides an earlier one within
    /// the same call. The whole batch applies or none of it does; the only
    /// failure is the up-front caller check.
    pub fn update_users(
        &mut self,
        caller: &Address,
        entries: impl IntoIterator<Item = (Address, ListAssignment)>,
    ) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        let mut count = 0;
        for (user, assignment) in entries {
            debug!(actor = %caller, user = %user, ?assignment, "user updated in batch");
            self.users.insert(user, assignment);
            count += 1;
        }
        self.record(caller, MutationKind::UsersUpdated { count });
        Ok(())
    }

    /// Create or replace a transfer-list record wholesale.
    ///
    /// The previous allowed set, if any, is discarded rather than merged.
    pub fn update_transferlist(
        &mut self,
        caller: &Address,
        id: TransferlistId,
        unrestricted: bool,
        allowed: impl IntoIterator<Item = TransferlistId>,
    ) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        let record = Transferlist::new(unrestricted, allowed);
        debug!(actor = %caller, %id, unrestricted = record.unrestricted, "transferlist updated");
        self.transferlists.insert(id, record);
        self.record(caller, MutationKind::TransferlistUpdated { id });
        Ok(())
    }

    /// Remove a transfer-list record. Removing an absent id succeeds
    /// silently.
    ///
    /// User entries assigned to the removed id are left in place and read
    /// as restricted from then on.
    pub fn remove_transferlist(
        &mut self,
        caller: &Address,
        id: TransferlistId,
    ) -> Result<(), AdminError> {
        self.require_admin(caller)?;
        debug!(actor = %caller, %id, "transferlist removed");
        self.transferlists.remove(&id);
        self.record(caller, MutationKind::TransferlistRemoved { id });
        Ok(())
    }

    /// The caller gate shared by every mutation.
    fn require_admin(&self, caller: &Address) -> Result<(), AdminError> {
        if caller != &self.admin {
            return Err(AdminError::InvalidCaller { caller: caller.clone() });
        }
        Ok(())
    }

    /// Append a mutation record.
    fn record(&mut self, actor: &Address, kind: MutationKind) {
        self.mutations.push(MutationRecord {
            actor: actor.clone(),
            kind,
            at: Timestamp::now(),
        });
    }
}
