//! # Principal Addresses
//!
//! `Address` is the opaque identifier for an actor subject to the transfer
//! policy. The engine never inspects its content: who the caller is has
//! already been resolved by the embedding host, and addresses only ever
//! participate in equality checks and map lookups.
//!
//! The only structural rule is that an address is non-empty. An empty
//! identifier is never a real principal and would otherwise be a convenient
//! accidental sentinel, so construction rejects it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque principal identifier.
///
/// Ordering and hashing follow the underlying string, so addresses can key
/// ordered maps and sets with deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(String);

/// Error returned when constructing an [`Address`] from an empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("address must not be empty")]
pub struct InvalidAddress;

impl Address {
    /// Create an address from a non-empty identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the string is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidAddress> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidAddress);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_non_empty() {
        let a = Address::new("acct-alice").unwrap();
        assert_eq!(a.as_str(), "acct-alice");
        assert_eq!(a.to_string(), "acct-alice");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Address::new(""), Err(InvalidAddress));
    }

    #[test]
    fn test_ordering_follows_string() {
        let a = Address::new("aaa").unwrap();
        let b = Address::new("bbb").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_round_trip() {
        let a = Address::new("acct-alice").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"acct-alice\"");
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, a);
    }
}
