//! Unit tests for the access token generator

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, TokenError};
use crate::services::token::config::TokenServiceConfig;
use crate::services::token::generator::{
    AccessTokenGenerator, MIN_SECRET_LENGTH, REFRESH_TOKEN_VALUE_LENGTH,
};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "unit-test-signing-secret-with-enough-length".to_string(),
        ..Default::default()
    }
}

fn test_generator() -> AccessTokenGenerator {
    AccessTokenGenerator::new(test_config()).unwrap()
}

fn test_user(role: Role) -> User {
    User::new("editor".to_string(), "hash".to_string(), role)
}

#[test]
fn test_empty_secret_is_rejected_at_construction() {
    let config = TokenServiceConfig {
        jwt_secret: "   ".to_string(),
        ..Default::default()
    };

    let result = AccessTokenGenerator::new(config);
    assert!(matches!(
        result,
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_short_secret_is_rejected_at_construction() {
    let config = TokenServiceConfig {
        jwt_secret: "x".repeat(MIN_SECRET_LENGTH - 1),
        ..Default::default()
    };

    let result = AccessTokenGenerator::new(config);
    assert!(matches!(
        result,
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_create_and_verify_access_token() {
    let generator = test_generator();
    let user = test_user(Role::Admin);

    let token = generator.create_access_token(&user).unwrap();
    let claims = generator.verify_access_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert!(claims.has_role("admin"));
    assert!(claims.has_role("user"));
}

#[test]
fn test_plain_user_claims() {
    let generator = test_generator();
    let user = test_user(Role::User);

    let token = generator.create_access_token(&user).unwrap();
    let claims = generator.verify_access_token(&token).unwrap();

    assert_eq!(claims.roles, vec!["user"]);
}

#[test]
fn test_garbage_token_is_rejected() {
    let generator = test_generator();

    let result = generator.verify_access_token("not_a_jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[test]
fn test_token_signed_with_other_key_is_rejected() {
    let generator = test_generator();

    let other = AccessTokenGenerator::new(TokenServiceConfig {
        jwt_secret: "a-completely-different-signing-secret-value".to_string(),
        ..Default::default()
    })
    .unwrap();

    let token = other.create_access_token(&test_user(Role::User)).unwrap();
    let result = generator.verify_access_token(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_expired_access_token_is_rejected() {
    let generator = test_generator();
    let user = test_user(Role::User);

    let mut claims = Claims::new_access_token(
        user.id,
        user.role_claims(),
        "streetcode",
        "streetcode-api",
        Duration::minutes(15),
    );
    claims.iat = (Utc::now() - Duration::hours(2)).timestamp();
    claims.nbf = claims.iat;
    claims.exp = (Utc::now() - Duration::hours(1)).timestamp();

    let token = generator.encode_jwt(&claims).unwrap();
    let result = generator.verify_access_token(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_not_yet_valid_token_is_rejected() {
    let generator = test_generator();
    let user = test_user(Role::User);

    let mut claims = Claims::new_access_token(
        user.id,
        user.role_claims(),
        "streetcode",
        "streetcode-api",
        Duration::hours(2),
    );
    claims.nbf = (Utc::now() + Duration::hours(1)).timestamp();

    let token = generator.encode_jwt(&claims).unwrap();
    let result = generator.verify_access_token(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenNotYetValid))
    ));
}

#[test]
fn test_opaque_values_are_random() {
    let generator = test_generator();

    let a = generator.generate_opaque_value();
    let b = generator.generate_opaque_value();

    assert_eq!(a.len(), REFRESH_TOKEN_VALUE_LENGTH);
    assert_eq!(b.len(), REFRESH_TOKEN_VALUE_LENGTH);
    assert_ne!(a, b);
    assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_hash_token_is_deterministic() {
    let hash1 = AccessTokenGenerator::hash_token("some_value");
    let hash2 = AccessTokenGenerator::hash_token("some_value");
    let hash3 = AccessTokenGenerator::hash_token("other_value");

    assert_eq!(hash1, hash2);
    assert_ne!(hash1, hash3);
    // SHA-256 hex digest
    assert_eq!(hash1.len(), 64);
}
