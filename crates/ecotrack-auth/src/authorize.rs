//! Authorization service — role permission check plus per-operation
//! ownership refinements.
//!
//! A pure decision function over identity × permission × request
//! parameters and the static permission table, with one external
//! lookup (team membership) in the manager/read-waste-by-user case.
//! The HTTP layer invokes this before dispatch with the statically
//! declared permission for the route.

use tracing::{info, warn};

use ecotrack_core::models::{Identity, Role};
use ecotrack_core::permissions::Permission;
use ecotrack_core::repository::UserRepository;
use ecotrack_core::{EcotrackError, EcotrackResult};

use crate::error::AuthzError;

/// Resource identifiers extracted from the request by the HTTP layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestScope {
    pub user_id: Option<i32>,
    pub team_id: Option<i32>,
}

impl RequestScope {
    pub fn for_user(user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
            team_id: None,
        }
    }

    pub fn for_team(team_id: i32) -> Self {
        Self {
            user_id: None,
            team_id: Some(team_id),
        }
    }
}

fn verify(assertion: bool, reason: impl Into<String>) -> Result<(), AuthzError> {
    if assertion {
        Ok(())
    } else {
        let reason = reason.into();
        warn!(%reason, "authorization refused");
        Err(AuthzError::PermissionDenied { reason })
    }
}

pub struct AuthorizationService<U: UserRepository> {
    users: U,
}

impl<U: UserRepository> AuthorizationService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Allow or deny `identity` performing the operation guarded by
    /// `permission` against the resources named in `scope`. Succeeds
    /// with no side effects; must run before the guarded operation.
    pub async fn authorize(
        &self,
        identity: &Identity,
        permission: Permission,
        scope: &RequestScope,
    ) -> EcotrackResult<()> {
        info!(
            user_id = identity.id,
            role = identity.role.as_str(),
            ?permission,
            "verifying authorization"
        );

        if !identity.role.allows(permission) {
            return Err(AuthzError::PermissionDenied {
                reason: format!(
                    "user {} with role {} does not have permission {:?}",
                    identity.id,
                    identity.role.as_str(),
                    permission
                ),
            }
            .into());
        }

        match identity.role {
            Role::Employee => {
                if permission == Permission::GetWasteByUserId {
                    let requested = require_user_id(scope)?;
                    verify(
                        requested == identity.id,
                        format!(
                            "user {} does not have access to user {requested}",
                            identity.id
                        ),
                    )?;
                }
            }
            Role::Manager => {
                if permission == Permission::GetWasteByUserId {
                    let requested = require_user_id(scope)?;
                    let members = self.users.get_by_team_id(identity.team_id).await?;
                    verify(
                        members.iter().any(|u| u.id == requested),
                        format!(
                            "user {requested} is not a member of team {}",
                            identity.team_id
                        ),
                    )?;
                }
                if matches!(
                    permission,
                    Permission::GetUsersByTeamId | Permission::GetWasteByTeamId
                ) {
                    let requested = require_team_id(scope)?;
                    verify(
                        requested == identity.team_id,
                        format!("user {} is not the manager of team {requested}", identity.id),
                    )?;
                }
            }
            // The role-set check alone suffices.
            Role::Admin => {}
        }

        info!(user_id = identity.id, ?permission, "authorization verified");
        Ok(())
    }
}

fn require_user_id(scope: &RequestScope) -> Result<i32, EcotrackError> {
    scope.user_id.ok_or_else(|| {
        AuthzError::PermissionDenied {
            reason: "request does not name a user".into(),
        }
        .into()
    })
}

fn require_team_id(scope: &RequestScope) -> Result<i32, EcotrackError> {
    scope.team_id.ok_or_else(|| {
        AuthzError::PermissionDenied {
            reason: "request does not name a team".into(),
        }
        .into()
    })
}
