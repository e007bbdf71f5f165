//! Unit tests for the authentication service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::token::{MockTokenRepository, TokenRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};
use crate::services::auth::password::hash_password;
use crate::services::auth::service::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

struct TestHarness {
    service: AuthService<MockUserRepository, MockTokenRepository>,
    users: MockUserRepository,
    tokens: MockTokenRepository,
}

fn harness() -> TestHarness {
    let users = MockUserRepository::new();
    let tokens = MockTokenRepository::new();
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-signing-secret-with-enough-length".to_string(),
        ..Default::default()
    };
    let token_service = Arc::new(TokenService::new(tokens.clone(), config).unwrap());
    let service = AuthService::new(Arc::new(users.clone()), token_service);

    TestHarness {
        service,
        users,
        tokens,
    }
}

async fn seed_user(users: &MockUserRepository, login: &str, password: &str, role: Role) -> User {
    let user = User::new(login.to_string(), hash_password(password).unwrap(), role);
    users.create(user).await.unwrap()
}

#[tokio::test]
async fn test_login_issues_token_pair() {
    let h = harness();
    let user = seed_user(&h.users, "editor", "password123", Role::User).await;

    let response = h.service.login("editor", "password123").await.unwrap();

    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.expires_in, 15 * 60);
    assert_eq!(response.role, "user");
    assert_eq!(h.tokens.count_active_tokens(user.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_login_trims_whitespace() {
    let h = harness();
    seed_user(&h.users, "editor", "password123", Role::User).await;

    let response = h.service.login("  editor  ", "password123").await.unwrap();
    assert_eq!(response.role, "user");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let h = harness();
    seed_user(&h.users, "editor", "password123", Role::User).await;

    let unknown = h.service.login("nobody", "password123").await;
    let wrong = h.service.login("editor", "not-the-password").await;

    for result in [unknown, wrong] {
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
    }
}

#[tokio::test]
async fn test_admin_login_reports_admin_role() {
    let h = harness();
    seed_user(&h.users, "admin", "password123", Role::Admin).await;

    let response = h.service.login("admin", "password123").await.unwrap();
    assert_eq!(response.role, "admin");
}

#[tokio::test]
async fn test_second_login_supersedes_refresh_token() {
    let h = harness();
    let user = seed_user(&h.users, "editor", "password123", Role::User).await;

    let first = h.service.login("editor", "password123").await.unwrap();
    h.service.login("editor", "password123").await.unwrap();

    // The first session's refresh token no longer exists
    assert_eq!(h.tokens.count_active_tokens(user.id).await.unwrap(), 1);
    let result = h.service.refresh(&first.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_refresh_rotates_and_invalidates_old_value() {
    let h = harness();
    seed_user(&h.users, "editor", "password123", Role::User).await;

    let login = h.service.login("editor", "password123").await.unwrap();
    let refreshed = h.service.refresh(&login.refresh_token).await.unwrap();

    assert_ne!(refreshed.refresh_token, login.refresh_token);
    assert_eq!(refreshed.role, "user");

    // The used value is revoked and reports so on replay
    let replay = h.service.refresh(&login.refresh_token).await;
    assert!(matches!(
        replay,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));

    // The rotated value still works
    h.service.refresh(&refreshed.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_refresh_with_unknown_value_fails() {
    let h = harness();

    let result = h.service.refresh("never_issued_value").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_logout_deletes_refresh_tokens() {
    let h = harness();
    let user = seed_user(&h.users, "editor", "password123", Role::User).await;

    let login = h.service.login("editor", "password123").await.unwrap();
    h.service.logout(user.id).await.unwrap();

    assert_eq!(h.tokens.count_active_tokens(user.id).await.unwrap(), 0);
    let result = h.service.refresh(&login.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_logout_without_tokens_is_ok() {
    let h = harness();
    h.service.logout(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_seed_admin_creates_account_once() {
    let h = harness();

    let created = h
        .service
        .seed_admin("admin", "password123")
        .await
        .unwrap()
        .expect("admin should be created");
    assert_eq!(created.role, Role::Admin);

    // Second seeding is a no-op
    let again = h.service.seed_admin("admin", "password123").await.unwrap();
    assert!(again.is_none());

    // The seeded account can log in
    let response = h.service.login("admin", "password123").await.unwrap();
    assert_eq!(response.role, "admin");
}

#[tokio::test]
async fn test_seed_admin_rejects_bad_login() {
    let h = harness();

    let result = h.service.seed_admin("has space", "password123").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidLoginFormat))
    ));
}

#[tokio::test]
async fn test_seed_admin_rejects_short_password() {
    let h = harness();

    let result = h.service.seed_admin("admin", "short").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}
