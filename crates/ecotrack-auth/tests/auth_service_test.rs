//! Integration tests for the authentication service over in-memory
//! repositories.

use ecotrack_auth::{AuthConfig, AuthError, AuthService, TokenError};
use ecotrack_core::models::{CreateUser, Role, User};
use ecotrack_core::password::hash_password;
use ecotrack_core::repository::UserRepository;
use ecotrack_db::repository::MemoryUserRepository;

fn test_config() -> AuthConfig {
    AuthConfig {
        secret: "integration-test-secret".into(),
        ..AuthConfig::default()
    }
}

async fn seed_user(
    users: &MemoryUserRepository,
    username: &str,
    password: &str,
    role: Role,
    team_id: i32,
) -> User {
    users
        .create(CreateUser {
            username: username.into(),
            email: format!("{username}@example.com"),
            role,
            team_id,
            password_hash: hash_password(password).unwrap(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn unknown_user_is_rejected() {
    let service = AuthService::new(MemoryUserRepository::new(), test_config());
    assert!(matches!(
        service.authenticate("nouser", "x").await,
        Err(AuthError::UserNotFound(_))
    ));
}

#[tokio::test]
async fn wrong_password_is_rejected_then_correct_succeeds() {
    let users = MemoryUserRepository::new();
    seed_user(&users, "alice", "secret", Role::Employee, 2).await;

    let service = AuthService::new(users, test_config());
    assert!(matches!(
        service.authenticate("alice", "wrong").await,
        Err(AuthError::WrongPassword)
    ));
    service.authenticate("alice", "secret").await.unwrap();
}

#[tokio::test]
async fn issued_token_verifies_into_identity() {
    let users = MemoryUserRepository::new();
    let user = seed_user(&users, "bob", "hunter2", Role::Manager, 5).await;

    let service = AuthService::new(users, test_config());
    let token = service.authenticate("bob", "hunter2").await.unwrap();
    assert_eq!(token.split('.').count(), 3);

    let header = format!("Bearer {token}");
    let identity = service.verify_authentication(Some(&header)).unwrap();
    assert_eq!(identity.id, user.id);
    assert_eq!(identity.username, "bob");
    assert_eq!(identity.email, "bob@example.com");
    assert_eq!(identity.role, Role::Manager);
    assert_eq!(identity.team_id, 5);
}

#[tokio::test]
async fn missing_or_malformed_header_is_rejected() {
    let service = AuthService::new(MemoryUserRepository::new(), test_config());

    assert!(matches!(
        service.verify_authentication(None),
        Err(AuthError::MissingOrMalformedHeader)
    ));
    assert!(matches!(
        service.verify_authentication(Some("token-without-scheme")),
        Err(AuthError::MissingOrMalformedHeader)
    ));
    assert!(matches!(
        service.verify_authentication(Some("Basic dXNlcjpwYXNz")),
        Err(AuthError::MissingOrMalformedHeader)
    ));
}

#[tokio::test]
async fn tampered_token_is_rejected_as_bad_signature() {
    let users = MemoryUserRepository::new();
    seed_user(&users, "carol", "pw", Role::Employee, 1).await;

    let service = AuthService::new(users, test_config());
    let token = service.authenticate("carol", "pw").await.unwrap();

    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();
    let header = format!("Bearer {head}.{tampered}");

    assert!(matches!(
        service.verify_authentication(Some(&header)),
        Err(AuthError::Token(TokenError::BadSignature))
    ));
}

#[tokio::test]
async fn role_change_only_visible_after_reauthentication() {
    let users = MemoryUserRepository::new();
    let user = seed_user(&users, "dora", "pw", Role::Employee, 1).await;

    let service = AuthService::new(users.clone(), test_config());
    let token = service.authenticate("dora", "pw").await.unwrap();

    // Promote the user; the already-issued token still carries the
    // role embedded at issuance.
    users.delete(user.id).await.unwrap();
    users
        .create(CreateUser {
            username: "dora".into(),
            email: "dora@example.com".into(),
            role: Role::Manager,
            team_id: 1,
            password_hash: hash_password("pw").unwrap(),
        })
        .await
        .unwrap();

    let header = format!("Bearer {token}");
    let identity = service.verify_authentication(Some(&header)).unwrap();
    assert_eq!(identity.role, Role::Employee);

    let fresh = service.authenticate("dora", "pw").await.unwrap();
    let fresh_header = format!("Bearer {fresh}");
    let identity = service.verify_authentication(Some(&fresh_header)).unwrap();
    assert_eq!(identity.role, Role::Manager);
}
