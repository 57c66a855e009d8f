//! # Bootstrap Configuration
//!
//! The serde document an embedding host uses to seed a registry: the
//! initial admin, the superuser set, user assignments, and transfer-list
//! records. Loaded from YAML, the shape mirrors the registry state
//! one-to-one.
//!
//! ```yaml
//! admin: whitelister
//! superusers:
//!   - alice
//! users:
//!   - address: flo
//!     transferlist: 0
//!   - address: gary
//! transferlists:
//!   - id: 0
//!     unrestricted: true
//!     allowed: [1]
//! ```
//!
//! A user entry without a `transferlist` key seeds a present-but-unassigned
//! entry, the same state `update_user` writes when clearing an assignment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gatelist_core::{Address, TransferlistId};

/// Error loading a bootstrap document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid YAML or does not match the schema.
    #[error("invalid registry config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One seeded user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntryConfig {
    /// The principal.
    pub address: Address,
    /// The assigned list, absent for a present-but-unassigned entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transferlist: Option<TransferlistId>,
}

/// One seeded transfer-list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferlistConfig {
    /// The record's caller-chosen id.
    pub id: TransferlistId,
    /// The restriction flag.
    pub unrestricted: bool,
    /// Allowed destination lists.
    #[serde(default)]
    pub allowed: BTreeSet<TransferlistId>,
}

/// The bootstrap document for [`Registry::from_config`].
///
/// [`Registry::from_config`]: crate::Registry::from_config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// The initial admin.
    pub admin: Address,
    /// Principals seeded into the superuser set.
    #[serde(default)]
    pub superusers: Vec<Address>,
    /// Seeded user entries.
    #[serde(default)]
    pub users: Vec<UserEntryConfig>,
    /// Seeded transfer-list records.
    #[serde(default)]
    pub transferlists: Vec<TransferlistConfig>,
}

impl RegistryConfig {
    /// Parse a bootstrap document from YAML.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let yaml = r#"
admin: whitelister
superusers:
  - alice
users:
  - address: flo
    transferlist: 0
  - address: gary
transferlists:
  - id: 0
    unrestricted: true
    allowed: [1]
  - id: 2
    unrestricted: false
"#;
        let config = RegistryConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.admin, Address::new("whitelister").unwrap());
        assert_eq!(config.superusers.len(), 1);
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].transferlist, Some(TransferlistId(0)));
        assert_eq!(config.users[1].transferlist, None);
        assert_eq!(config.transferlists.len(), 2);
        assert!(config.transferlists[1].allowed.is_empty());
    }

    #[test]
    fn test_parse_minimal_document() {
        let config = RegistryConfig::from_yaml_str("admin: whitelister\n").unwrap();
        assert!(config.superusers.is_empty());
        assert!(config.users.is_empty());
        assert!(config.transferlists.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_admin() {
        assert!(RegistryConfig::from_yaml_str("superusers: []\n").is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = RegistryConfig {
            admin: Address::new("whitelister").unwrap(),
            superusers: vec![Address::new("alice").unwrap()],
            users: vec![UserEntryConfig {
                address: Address::new("flo").unwrap(),
                transferlist: Some(TransferlistId(0)),
            }],
            transferlists: vec![TransferlistConfig {
                id: TransferlistId(0),
                unrestricted: true,
                allowed: BTreeSet::from([TransferlistId(1)]),
            }],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = RegistryConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
