//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Default refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "streetcode";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "streetcode-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Role names granted to the subject
    pub roles: Vec<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `roles` - Role names to embed in the token
    /// * `issuer` - Issuer claim value
    /// * `audience` - Audience claim value
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    ///
    /// A new `Claims` instance for an access token
    pub fn new_access_token(
        user_id: Uuid,
        roles: Vec<String>,
        issuer: &str,
        audience: &str,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            roles,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are valid (not expired and after nbf)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Checks if the claims carry a given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database
///
/// The opaque token value handed to the client is never stored; only its
/// SHA-256 hash is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Hashed token value for security
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `token_hash` - The hashed token value
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    ///
    /// A new `RefreshToken` instance
    pub fn new(user_id: Uuid, token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + ttl,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is valid if it hasn't expired and hasn't been revoked
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }

    /// Gets the time remaining until expiration
    ///
    /// # Returns
    ///
    /// A `Duration` representing the time until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_claims(user_id: Uuid, roles: Vec<String>) -> Claims {
        Claims::new_access_token(
            user_id,
            roles,
            JWT_ISSUER,
            JWT_AUDIENCE,
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        )
    }

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = access_claims(user_id, vec!["admin".to_string(), "user".to_string()]);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(claims.has_role("admin"));
        assert!(claims.has_role("user"));
        assert!(!claims.has_role("moderator"));
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = access_claims(user_id, vec!["user".to_string()]);

        let parsed_id = claims.user_id().unwrap();
        assert_eq!(parsed_id, user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let user_id = Uuid::new_v4();
        let mut claims = access_claims(user_id, vec!["user".to_string()]);

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let user_id = Uuid::new_v4();
        let mut claims = access_claims(user_id, vec!["user".to_string()]);

        // Set nbf to future
        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token_hash = "hashed_token_value".to_string();
        let token = RefreshToken::new(
            user_id,
            token_hash.clone(),
            Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        );

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token_hash, token_hash);
        assert!(!token.is_revoked);
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_refresh_token_revocation() {
        let user_id = Uuid::new_v4();
        let mut token = RefreshToken::new(user_id, "hash".to_string(), Duration::days(7));

        assert!(token.is_valid());

        token.revoke();

        assert!(token.is_revoked);
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let user_id = Uuid::new_v4();
        let mut token = RefreshToken::new(user_id, "hash".to_string(), Duration::days(7));

        // Manually set expiration to past
        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_time_until_expiration() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(
            user_id,
            "hash".to_string(),
            Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        );

        let time_remaining = token.time_until_expiration();
        let expected_max = Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);
        let expected_min = Duration::days(REFRESH_TOKEN_EXPIRY_DAYS - 1);

        assert!(time_remaining <= expected_max);
        assert!(time_remaining > expected_min);
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new(
            "access_token_jwt".to_string(),
            "opaque_refresh_value".to_string(),
            ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        );

        assert_eq!(pair.access_token, "access_token_jwt");
        assert_eq!(pair.refresh_token, "opaque_refresh_value");
        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_serialization() {
        let user_id = Uuid::new_v4();
        let claims = access_claims(user_id, vec!["admin".to_string(), "user".to_string()]);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_refresh_token_serialization() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "token_hash".to_string(), Duration::days(7));

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: RefreshToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
