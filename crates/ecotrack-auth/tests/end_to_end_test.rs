//! Full onboarding flow over cached in-memory repositories: seed the
//! admin team, create a second team, create an employee in it, log
//! in, and verify the issued token round-trips into the right
//! identity and claims.

use ecotrack_auth::{token, AuthConfig, AuthService, AuthorizationService, RequestScope};
use ecotrack_core::models::Role;
use ecotrack_core::permissions::Permission;
use ecotrack_core::service::{NewUser, NewWasteEntry, TeamService, UserService, WasteService};
use ecotrack_db::repository::{
    CachedTeamRepository, CachedUserRepository, CachedWasteRepository, MemoryTeamRepository,
    MemoryUserRepository, MemoryWasteRepository,
};
use ecotrack_db::MemoryCache;

#[tokio::test]
async fn onboarding_login_and_scoped_reads() {
    let cache = MemoryCache::new();
    let team_store = MemoryTeamRepository::new();
    let user_store = MemoryUserRepository::new();
    let waste_store = MemoryWasteRepository::new(user_store.clone());

    let teams = CachedTeamRepository::new(team_store, cache.clone());
    let users = CachedUserRepository::new(user_store.clone(), cache.clone());
    let waste = CachedWasteRepository::new(waste_store, user_store.clone(), cache.clone());

    let team_service = TeamService::new(teams.clone());
    let user_service = UserService::new(teams.clone(), users.clone());
    let waste_service = WasteService::new(users.clone(), waste);

    let admin_team = team_service.create_team("Admin").await.unwrap();
    assert_eq!(admin_team.id, 1);
    let new_team = team_service.create_team("New Team").await.unwrap();
    assert_eq!(new_team.id, 2);

    let employee = user_service
        .create_user(NewUser {
            username: "testuser".into(),
            email: "testuser@example.com".into(),
            role: Role::Employee,
            team_id: new_team.id,
            password: "password".into(),
        })
        .await
        .unwrap();
    assert_eq!(employee.team_id, new_team.id);
    // The raw password never reaches the store.
    assert_ne!(employee.password_hash, "password");

    let config = AuthConfig {
        secret: "end-to-end-secret".into(),
        ..AuthConfig::default()
    };
    let auth = AuthService::new(users.clone(), config.clone());

    let bearer = auth.authenticate("testuser", "password").await.unwrap();
    assert_eq!(bearer.split('.').count(), 3);

    let claims = token::decode_token(&bearer, &config).unwrap();
    assert_eq!(claims.sub, employee.id);
    assert_eq!(claims.username, "testuser");
    assert_eq!(claims.email, "testuser@example.com");
    assert_eq!(claims.role, Role::Employee);
    assert_eq!(claims.team_id, new_team.id);

    let header = format!("Bearer {bearer}");
    let identity = auth.verify_authentication(Some(&header)).unwrap();
    assert_eq!(identity.id, employee.id);
    assert_eq!(identity.team_id, new_team.id);

    // The logged-in employee records waste and may read it back, but
    // not anyone else's.
    let authz = AuthorizationService::new(users.clone());
    authz
        .authorize(&identity, Permission::CreateWaste, &RequestScope::default())
        .await
        .unwrap();
    let entry = waste_service
        .create_waste(NewWasteEntry {
            kind: "plastic".into(),
            weight: 2.5,
            user_id: identity.id,
            timestamp: None,
        })
        .await
        .unwrap();

    authz
        .authorize(
            &identity,
            Permission::GetWasteByUserId,
            &RequestScope::for_user(identity.id),
        )
        .await
        .unwrap();
    let own = waste_service.get_waste_by_user_id(identity.id).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, entry.id);
    assert_eq!(own[0].kind, "plastic");

    assert!(authz
        .authorize(
            &identity,
            Permission::GetWasteByUserId,
            &RequestScope::for_user(identity.id + 1),
        )
        .await
        .is_err());
}
