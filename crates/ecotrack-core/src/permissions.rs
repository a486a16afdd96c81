//! Static role → permission mapping.
//!
//! Built once at compile time; lookup is a match over the closed
//! [`Role`] enum, so an unknown role can never reach a grant.

use crate::models::user::Role;

/// A named capability gating one logical action, independent of its
/// transport binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    CreateWaste,
    GetWasteByUserId,
    GetWasteByTeamId,
    CreateUser,
    GetUsersByTeamId,
    CreateTeam,
    ListTeams,
}

/// Every permission defined in the system. The Admin role maps to
/// exactly this set.
pub const ALL_PERMISSIONS: &[Permission] = &[
    Permission::CreateWaste,
    Permission::GetWasteByUserId,
    Permission::GetWasteByTeamId,
    Permission::CreateUser,
    Permission::GetUsersByTeamId,
    Permission::CreateTeam,
    Permission::ListTeams,
];

const EMPLOYEE_PERMISSIONS: &[Permission] =
    &[Permission::CreateWaste, Permission::GetWasteByUserId];

const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::CreateWaste,
    Permission::GetWasteByUserId,
    Permission::GetUsersByTeamId,
    Permission::GetWasteByTeamId,
];

impl Role {
    /// The permission set granted to this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Employee => EMPLOYEE_PERMISSIONS,
            Role::Manager => MANAGER_PERMISSIONS,
            Role::Admin => ALL_PERMISSIONS,
        }
    }

    pub fn allows(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_superset(bigger: &[Permission], smaller: &[Permission]) -> bool {
        smaller.iter().all(|p| bigger.contains(p))
    }

    #[test]
    fn permission_sets_are_monotonic() {
        assert!(is_superset(
            Role::Manager.permissions(),
            Role::Employee.permissions()
        ));
        assert!(is_superset(
            Role::Admin.permissions(),
            Role::Manager.permissions()
        ));
    }

    #[test]
    fn admin_holds_every_permission() {
        for permission in ALL_PERMISSIONS {
            assert!(Role::Admin.allows(*permission));
        }
    }

    #[test]
    fn employee_cannot_manage_teams_or_users() {
        assert!(!Role::Employee.allows(Permission::CreateTeam));
        assert!(!Role::Employee.allows(Permission::CreateUser));
        assert!(!Role::Employee.allows(Permission::GetUsersByTeamId));
    }

    #[test]
    fn manager_cannot_create_users_or_teams() {
        assert!(Role::Manager.allows(Permission::GetUsersByTeamId));
        assert!(!Role::Manager.allows(Permission::CreateUser));
        assert!(!Role::Manager.allows(Permission::CreateTeam));
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!(Role::parse("Superuser").is_none());
        assert_eq!(Role::parse("Manager"), Some(Role::Manager));
    }
}
