//! # gatelist-policy — The Decision Engine
//!
//! Pure evaluation of the three authorization queries over a
//! [`PolicyStore`] snapshot:
//!
//! - [`assert_receivers`]: may these principals receive value at all?
//! - [`assert_transfers`]: may this batch of transfers proceed, given who
//!   is asking?
//! - [`assert_transferlist`]: is this list-to-list edge structurally valid?
//!
//! Queries never mutate, never block, and always return a decision: `Ok(())`
//! or a [`Refusal`](gatelist_core::Refusal) naming the first failing check.
//! Policy state lives in `gatelist-registry`; this crate only reads it.
//!
//! The [`TransferGate`] facade bundles an in-memory registry with the
//! engine into the full operation surface for embedding hosts that do not
//! bring their own store.
//!
//! ## Privilege
//!
//! A caller in the superuser set is exempt from the allowed-list
//! reachability check and gets a distinct refusal wording for missing
//! entries, but is never exempt from restriction state. Both caller modes
//! run the same evaluation path, parameterized by [`Privilege`], so the
//! shared checks cannot drift apart.

pub mod engine;
pub mod gate;
pub mod status;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use engine::{
    assert_receiver, assert_receivers, assert_transferlist, assert_transfers, Privilege,
    TransferIntent,
};

// ─── Status re-exports ──────────────────────────────────────────────

pub use status::{user_status, UserStatus};

// ─── Facade re-exports ──────────────────────────────────────────────

pub use gate::TransferGate;
