//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sc_shared::config::AuthConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
    /// Issuer claim embedded in and required of access tokens
    pub issuer: String,
    /// Audience claim embedded in and required of access tokens
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_token_expiry_seconds: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt.secret.clone(),
            // Unrecognized names fall back the same way the env parsing
            // in sc_shared does.
            algorithm: config.jwt.algorithm.parse().unwrap_or(Algorithm::HS256),
            access_token_expiry_seconds: config.jwt.access_token_expiry,
            refresh_token_expiry_seconds: config.jwt.refresh_token_expiry,
            issuer: config.jwt.issuer.clone(),
            audience: config.jwt.audience.clone(),
        }
    }
}
