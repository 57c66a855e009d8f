//! # Per-Principal Status Resolution
//!
//! Both principal-level queries reduce an address to one of three statuses
//! before any further branching:
//!
//! - `NotFound`: no user entry, or an entry with no list assigned. The two
//!   storable states are distinct in the registry but indistinguishable to
//!   policy.
//! - `Restricted`: assigned to a list that does not exist, or to a list
//!   marked restricted. A dangling assignment is not an error; it reads as
//!   restricted.
//! - `Unrestricted(list)`: assigned to an existing list with the
//!   unrestricted flag set. Only this status can participate in transfers.

use gatelist_core::{Address, ListAssignment, Transferlist, TransferlistId};
use gatelist_registry::PolicyStore;

/// The policy status of a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// No usable user entry.
    NotFound,
    /// Assigned to a missing or restricted list.
    Restricted,
    /// Assigned to the given unrestricted list.
    Unrestricted(TransferlistId),
}

impl UserStatus {
    /// Whether the principal may participate in transfers, subject to the
    /// allowed-list graph.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted(_))
    }

    /// The principal's list, when unrestricted.
    pub fn transferlist(&self) -> Option<TransferlistId> {
        match self {
            Self::Unrestricted(id) => Some(*id),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("NOT_FOUND"),
            Self::Restricted => f.write_str("RESTRICTED"),
            Self::Unrestricted(id) => write!(f, "UNRESTRICTED({id})"),
        }
    }
}

/// Status resolution that keeps the fetched record, so the transfer walk
/// does not look the source list up twice.
pub(crate) enum Resolution {
    NotFound,
    Restricted,
    Member {
        id: TransferlistId,
        record: Transferlist,
    },
}

pub(crate) fn resolve<S: PolicyStore>(store: &S, addr: &Address) -> Resolution {
    let id = match store.user_assignment(addr) {
        None | Some(ListAssignment::Unassigned) => return Resolution::NotFound,
        Some(ListAssignment::Assigned(id)) => id,
    };
    match store.transferlist(id) {
        None => Resolution::Restricted,
        Some(record) if !record.unrestricted => Resolution::Restricted,
        Some(record) => Resolution::Member { id, record },
    }
}

/// Compute the policy status of `addr` against the store snapshot.
pub fn user_status<S: PolicyStore>(store: &S, addr: &Address) -> UserStatus {
    match resolve(store, addr) {
        Resolution::NotFound => UserStatus::NotFound,
        Resolution::Restricted => UserStatus::Restricted,
        Resolution::Member { id, .. } => UserStatus::Unrestricted(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatelist_registry::Registry;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn world() -> (Registry, Address) {
        let admin = addr("whitelister");
        let mut r = Registry::new(admin.clone());
        r.update_transferlist(&admin, TransferlistId(0), true, []).unwrap();
        r.update_transferlist(&admin, TransferlistId(2), false, []).unwrap();
        r.update_user(&admin, addr("flo"), Some(TransferlistId(0))).unwrap();
        r.update_user(&admin, addr("gary"), None).unwrap();
        r.update_user(&admin, addr("jacky"), Some(TransferlistId(2))).unwrap();
        r.update_user(&admin, addr("dan"), Some(TransferlistId(9))).unwrap();
        (r, admin)
    }

    #[test]
    fn test_absent_principal_is_not_found() {
        let (r, _) = world();
        assert_eq!(user_status(&r, &addr("eddy")), UserStatus::NotFound);
    }

    #[test]
    fn test_unassigned_entry_is_not_found() {
        let (r, _) = world();
        assert_eq!(user_status(&r, &addr("gary")), UserStatus::NotFound);
    }

    #[test]
    fn test_member_of_unrestricted_list() {
        let (r, _) = world();
        assert_eq!(
            user_status(&r, &addr("flo")),
            UserStatus::Unrestricted(TransferlistId(0))
        );
        assert!(user_status(&r, &addr("flo")).is_unrestricted());
        assert_eq!(
            user_status(&r, &addr("flo")).transferlist(),
            Some(TransferlistId(0))
        );
    }

    #[test]
    fn test_member_of_restricted_list() {
        let (r, _) = world();
        assert_eq!(user_status(&r, &addr("jacky")), UserStatus::Restricted);
    }

    #[test]
    fn test_dangling_assignment_is_restricted() {
        let (r, _) = world();
        assert_eq!(user_status(&r, &addr("dan")), UserStatus::Restricted);
    }

    #[test]
    fn test_restricting_a_list_flips_member_status() {
        let (mut r, admin) = world();
        assert!(user_status(&r, &addr("flo")).is_unrestricted());
        r.update_transferlist(&admin, TransferlistId(0), false, []).unwrap();
        assert_eq!(user_status(&r, &addr("flo")), UserStatus::Restricted);
    }

    #[test]
    fn test_removing_a_list_flips_member_status() {
        let (mut r, admin) = world();
        r.remove_transferlist(&admin, TransferlistId(0)).unwrap();
        assert_eq!(user_status(&r, &addr("flo")), UserStatus::Restricted);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(UserStatus::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(UserStatus::Restricted.to_string(), "RESTRICTED");
        assert_eq!(
            UserStatus::Unrestricted(TransferlistId(1)).to_string(),
            "UNRESTRICTED(transferlist:1)"
        );
    }
}
