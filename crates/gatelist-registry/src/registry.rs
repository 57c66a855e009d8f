//! # Registry State
//!
//! The four state elements of the policy model: admin identity, superuser
//! set, user map, transfer-list table, plus the mutation log. This module
//! is storage and structural invariants only; the branching policy lives in
//! the decision engine and the mutation gating in [`crate::admin`].
//!
//! ## Invariants
//!
//! - Exactly one admin exists at all times after construction. There is no
//!   uninitialized admin value to guard against: `Registry::new` requires
//!   an [`Address`], and an `Address` cannot be empty.
//! - A user entry may reference a transfer-list id with no record. The
//!   dangling reference is tolerated here and surfaces as a restricted
//!   status at query time.
//! - Ordered maps and sets throughout, so iteration order and serialized
//!   form are deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use gatelist_core::{Address, ListAssignment, Transferlist, TransferlistId};

use crate::audit::MutationRecord;
use crate::config::RegistryConfig;
use crate::store::PolicyStore;

/// The mutable registry: admin, superusers, users, transfer lists, and the
/// mutation log.
///
/// All mutation goes through the admin surface in [`crate::admin`]; this
/// type only exposes reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub(crate) admin: Address,
    pub(crate) superusers: BTreeSet<Address>,
    pub(crate) users: BTreeMap<Address, ListAssignment>,
    pub(crate) transferlists: BTreeMap<TransferlistId, Transferlist>,
    pub(crate) mutations: Vec<MutationRecord>,
}

impl Registry {
    /// Create an empty registry with the given admin.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            superusers: BTreeSet::new(),
            users: BTreeMap::new(),
            transferlists: BTreeMap::new(),
            mutations: Vec::new(),
        }
    }

    /// Build a registry from a bootstrap document.
    ///
    /// Seeding is genesis, not mutation: no caller gate applies and the
    /// mutation log starts empty. The resulting state is identical to what
    /// the admin could build through the mutation surface.
    pub fn from_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new(config.admin);
        registry.superusers = config.superusers.into_iter().collect();
        for entry in config.users {
            registry
                .users
                .insert(entry.address, ListAssignment::from(entry.transferlist));
        }
        for list in config.transferlists {
            registry
                .transferlists
                .insert(list.id, Transferlist::new(list.unrestricted, list.allowed));
        }
        registry
    }

    /// The current admin.
    pub fn admin(&self) -> &Address {
        &self.admin
    }

    /// The superuser set.
    pub fn superusers(&self) -> &BTreeSet<Address> {
        &self.superusers
    }

    /// Number of user entries, assigned or not.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of transfer-list records.
    pub fn transferlist_count(&self) -> usize {
        self.transferlists.len()
    }

    /// The ordered log of successful mutations.
    pub fn mutation_log(&self) -> &[MutationRecord] {
        &self.mutations
    }
}

impl PolicyStore for Registry {
    fn user_assignment(&self, addr: &Address) -> Option<ListAssignment> {
        self.users.get(addr).copied()
    }

    fn transferlist(&self, id: TransferlistId) -> Option<Transferlist> {
        self.transferlists.get(&id).cloned()
    }

    fn is_superuser(&self, addr: &Address) -> bool {
        self.superusers.contains(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new(addr("admin"));
        assert_eq!(registry.admin(), &addr("admin"));
        assert!(registry.superusers().is_empty());
        assert_eq!(registry.user_count(), 0);
        assert_eq!(registry.transferlist_count(), 0);
        assert!(registry.mutation_log().is_empty());
    }

    #[test]
    fn test_untouched_principal_has_no_entry() {
        let registry = Registry::new(addr("admin"));
        assert_eq!(registry.user_assignment(&addr("nobody")), None);
        assert!(!registry.is_superuser(&addr("nobody")));
    }

    #[test]
    fn test_missing_transferlist_reads_none() {
        let registry = Registry::new(addr("admin"));
        assert_eq!(registry.transferlist(TransferlistId(666)), None);
    }

    #[test]
    fn test_registry_serde_round_trip() {
        let mut registry = Registry::new(addr("admin"));
        registry.users.insert(addr("flo"), ListAssignment::Assigned(TransferlistId(0)));
        registry
            .transferlists
            .insert(TransferlistId(0), Transferlist::new(true, []));
        let json = serde_json::to_string(&registry).unwrap();
        let parsed: Registry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.admin(), registry.admin());
        assert_eq!(
            parsed.user_assignment(&addr("flo")),
            Some(ListAssignment::Assigned(TransferlistId(0)))
        );
        assert_eq!(parsed.transferlist(TransferlistId(0)), registry.transferlist(TransferlistId(0)));
    }
}
