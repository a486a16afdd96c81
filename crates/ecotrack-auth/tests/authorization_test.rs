//! Authorization decision tests: role permission sets plus the
//! per-operation ownership and team-scoping refinements.

use ecotrack_auth::{AuthorizationService, RequestScope};
use ecotrack_core::models::{CreateUser, Identity, Role};
use ecotrack_core::password::hash_password;
use ecotrack_core::permissions::Permission;
use ecotrack_core::repository::UserRepository;
use ecotrack_core::EcotrackError;
use ecotrack_db::repository::MemoryUserRepository;

fn identity(id: i32, role: Role, team_id: i32) -> Identity {
    Identity {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role,
        team_id,
    }
}

async fn seed_member(users: &MemoryUserRepository, username: &str, team_id: i32) -> i32 {
    users
        .create(CreateUser {
            username: username.into(),
            email: format!("{username}@example.com"),
            role: Role::Employee,
            team_id,
            password_hash: hash_password("pw").unwrap(),
        })
        .await
        .unwrap()
        .id
}

fn assert_denied(result: Result<(), EcotrackError>) {
    assert!(matches!(
        result,
        Err(EcotrackError::AuthorizationDenied { .. })
    ));
}

#[tokio::test]
async fn employee_may_only_read_own_waste() {
    let service = AuthorizationService::new(MemoryUserRepository::new());
    let employee = identity(1, Role::Employee, 1);

    service
        .authorize(&employee, Permission::GetWasteByUserId, &RequestScope::for_user(1))
        .await
        .unwrap();
    assert_denied(
        service
            .authorize(&employee, Permission::GetWasteByUserId, &RequestScope::for_user(2))
            .await,
    );
}

#[tokio::test]
async fn employee_lacks_management_permissions() {
    let service = AuthorizationService::new(MemoryUserRepository::new());
    let employee = identity(1, Role::Employee, 1);

    for permission in [
        Permission::CreateUser,
        Permission::CreateTeam,
        Permission::ListTeams,
        Permission::GetUsersByTeamId,
        Permission::GetWasteByTeamId,
    ] {
        assert_denied(
            service
                .authorize(&employee, permission, &RequestScope::default())
                .await,
        );
    }
}

#[tokio::test]
async fn manager_team_reads_are_scoped_to_own_team() {
    let service = AuthorizationService::new(MemoryUserRepository::new());
    let manager = identity(1, Role::Manager, 1);

    service
        .authorize(&manager, Permission::GetWasteByTeamId, &RequestScope::for_team(1))
        .await
        .unwrap();
    service
        .authorize(&manager, Permission::GetUsersByTeamId, &RequestScope::for_team(1))
        .await
        .unwrap();
    assert_denied(
        service
            .authorize(&manager, Permission::GetWasteByTeamId, &RequestScope::for_team(2))
            .await,
    );
    assert_denied(
        service
            .authorize(&manager, Permission::GetUsersByTeamId, &RequestScope::for_team(2))
            .await,
    );
}

#[tokio::test]
async fn manager_may_read_waste_of_own_team_members_only() {
    let users = MemoryUserRepository::new();
    let member = seed_member(&users, "member", 1).await;
    let outsider = seed_member(&users, "outsider", 2).await;

    let service = AuthorizationService::new(users);
    let manager = identity(99, Role::Manager, 1);

    service
        .authorize(
            &manager,
            Permission::GetWasteByUserId,
            &RequestScope::for_user(member),
        )
        .await
        .unwrap();
    assert_denied(
        service
            .authorize(
                &manager,
                Permission::GetWasteByUserId,
                &RequestScope::for_user(outsider),
            )
            .await,
    );
}

#[tokio::test]
async fn manager_cannot_create_teams() {
    let service = AuthorizationService::new(MemoryUserRepository::new());
    let manager = identity(1, Role::Manager, 1);

    assert_denied(
        service
            .authorize(&manager, Permission::CreateTeam, &RequestScope::default())
            .await,
    );
    assert_denied(
        service
            .authorize(&manager, Permission::ListTeams, &RequestScope::default())
            .await,
    );
}

#[tokio::test]
async fn admin_passes_all_checks_regardless_of_scope() {
    let service = AuthorizationService::new(MemoryUserRepository::new());
    let admin = identity(1, Role::Admin, 1);

    for permission in [
        Permission::CreateWaste,
        Permission::GetWasteByUserId,
        Permission::GetWasteByTeamId,
        Permission::CreateUser,
        Permission::GetUsersByTeamId,
        Permission::CreateTeam,
        Permission::ListTeams,
    ] {
        // No ownership refinement applies; other users' resources are
        // fair game.
        service
            .authorize(&admin, permission, &RequestScope::for_user(42))
            .await
            .unwrap();
        service
            .authorize(&admin, permission, &RequestScope::for_team(42))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn scope_without_required_id_is_denied() {
    let service = AuthorizationService::new(MemoryUserRepository::new());

    let employee = identity(1, Role::Employee, 1);
    assert_denied(
        service
            .authorize(&employee, Permission::GetWasteByUserId, &RequestScope::default())
            .await,
    );

    let manager = identity(2, Role::Manager, 1);
    assert_denied(
        service
            .authorize(&manager, Permission::GetWasteByTeamId, &RequestScope::default())
            .await,
    );
}
