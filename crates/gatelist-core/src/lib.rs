//! # gatelist-core — Foundational Types for gatelist
//!
//! This crate is the leaf of the gatelist workspace. It defines the domain
//! primitives every other crate builds on: principal addresses, transfer-list
//! identifiers and records, list assignments, and the refusal taxonomy the
//! decision engine reports.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address` and
//!    `TransferlistId` are newtypes with their own `Display` impls. No bare
//!    strings or integers for identifiers.
//!
//! 2. **`ListAssignment` keeps "no entry" and "entry with no list" distinct.**
//!    A principal can be absent from the user map, present with
//!    `ListAssignment::Unassigned`, or present with
//!    `ListAssignment::Assigned(id)`. The first two collapse to the same
//!    policy status, but they are different storable states and both must be
//!    reachable through the mutation surface.
//!
//! 3. **Stable refusal codes.** Every `Refusal` variant renders a
//!    SCREAMING_SNAKE policy code through `Display` and `code()`. Embedding
//!    hosts match on the variant; wire surfaces log the code.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gatelist-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public state types derive `Debug`, `Clone`, `Serialize`,
//!   `Deserialize`.

pub mod address;
pub mod error;
pub mod list;

// Re-export primary types for ergonomic imports.
pub use address::{Address, InvalidAddress};
pub use error::{AdminError, Refusal};
pub use list::{ListAssignment, Transferlist, TransferlistId};
