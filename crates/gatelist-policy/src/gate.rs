//! # TransferGate
//!
//! The facade for embedding hosts that want the whole surface in one
//! place: an owned in-memory [`Registry`] plus the decision engine.
//! Mutations take an explicit caller and delegate to the registry's admin
//! surface; queries delegate to the engine against the current state.
//!
//! Hosts with their own storage implement
//! [`PolicyStore`](gatelist_registry::PolicyStore) and call the engine
//! functions directly instead.

use gatelist_core::{AdminError, Address, ListAssignment, Refusal, TransferlistId};
use gatelist_registry::{Registry, RegistryConfig};

use crate::engine::{self, TransferIntent};
use crate::status::{user_status, UserStatus};

/// An in-memory registry bundled with the decision engine.
#[derive(Debug, Clone)]
pub struct TransferGate {
    registry: Registry,
}

impl TransferGate {
    /// Create a gate over an empty registry with the given admin.
    pub fn new(admin: Address) -> Self {
        Self {
            registry: Registry::new(admin),
        }
    }

    /// Create a gate from a bootstrap document.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::from_config(config),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ── Mutations (admin-gated) ──────────────────────────────────────

    /// Replace the admin identifier.
    pub fn set_admin(&mut self, caller: &Address, new_admin: Address) -> Result<(), AdminError> {
        self.registry.set_admin(caller, new_admin)
    }

    /// Add a principal to the superuser set.
    pub fn add_superuser(&mut self, caller: &Address, user: Address) -> Result<(), AdminError> {
        self.registry.add_superuser(caller, user)
    }

    /// Remove a principal from the superuser set.
    pub fn remove_superuser(&mut self, caller: &Address, user: Address) -> Result<(), AdminError> {
        self.registry.remove_superuser(caller, user)
    }

    /// Set or clear the user entry for a principal.
    pub fn update_user(
        &mut self,
        caller: &Address,
        user: Address,
        assignment: impl Into<ListAssignment>,
    ) -> Result<(), AdminError> {
        self.registry.update_user(caller, user, assignment)
    }

    /// Apply a batch of user updates in order, atomically.
    pub fn update_users(
        &mut self,
        caller: &Address,
        entries: impl IntoIterator<Item = (Address, ListAssignment)>,
    ) -> Result<(), AdminError> {
        self.registry.update_users(caller, entries)
    }

    /// Create or replace a transfer-list record wholesale.
    pub fn update_transferlist(
        &mut self,
        caller: &Address,
        id: TransferlistId,
        unrestricted: bool,
        allowed: impl IntoIterator<Item = TransferlistId>,
    ) -> Result<(), AdminError> {
        self.registry.update_transferlist(caller, id, unrestricted, allowed)
    }

    /// Remove a transfer-list record.
    pub fn remove_transferlist(
        &mut self,
        caller: &Address,
        id: TransferlistId,
    ) -> Result<(), AdminError> {
        self.registry.remove_transferlist(caller, id)
    }

    // ── Queries (pure) ───────────────────────────────────────────────

    /// The policy status of a principal.
    pub fn user_status(&self, addr: &Address) -> UserStatus {
        user_status(&self.registry, addr)
    }

    /// May this principal receive value at all?
    pub fn assert_receiver(&self, addr: &Address) -> Result<(), Refusal> {
        engine::assert_receiver(&self.registry, addr)
    }

    /// May every one of these principals receive value at all?
    pub fn assert_receivers(&self, addrs: &[Address]) -> Result<(), Refusal> {
        engine::assert_receivers(&self.registry, addrs)
    }

    /// May this batch of transfers proceed, given who is asking?
    pub fn assert_transfers(
        &self,
        caller: &Address,
        batch: &[TransferIntent],
    ) -> Result<(), Refusal> {
        engine::assert_transfers(&self.registry, caller, batch)
    }

    /// Is this list-to-list edge structurally valid?
    pub fn assert_transferlist(
        &self,
        from_id: TransferlistId,
        to_id: TransferlistId,
    ) -> Result<(), Refusal> {
        engine::assert_transferlist(&self.registry, from_id, to_id)
    }
}
