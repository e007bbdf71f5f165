//! Stateless token generation and verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Minimum length accepted for the JWT signing secret
pub const MIN_SECRET_LENGTH: usize = 32;

/// Length of the opaque refresh token value handed to clients
pub const REFRESH_TOKEN_VALUE_LENGTH: usize = 43;

/// Stateless generator for signed access tokens and opaque refresh values
///
/// Pure function of its configuration plus the current time; owns no
/// persistent state. A misconfigured signing key is rejected at
/// construction so startup fails instead of the first request.
pub struct AccessTokenGenerator {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AccessTokenGenerator {
    /// Creates a new generator from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// * `Ok(AccessTokenGenerator)` - Generator ready for use
    /// * `Err(DomainError::Configuration)` - The signing secret is empty or
    ///   shorter than [`MIN_SECRET_LENGTH`]
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        let secret = config.jwt_secret.trim();
        if secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT signing secret is not configured".to_string(),
            });
        }
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(DomainError::Configuration {
                message: format!(
                    "JWT signing secret must be at least {} bytes",
                    MIN_SECRET_LENGTH
                ),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Creates a signed access token for a user
    ///
    /// The token embeds the user's id as subject and their role claims
    /// ([`User::role_claims`]), and expires after the configured short TTL.
    pub fn create_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            user.id,
            user.role_claims(),
            &self.config.issuer,
            &self.config.audience,
            chrono::Duration::seconds(self.config.access_token_expiry_seconds),
        );
        self.encode_jwt(&claims)
    }

    /// Verifies an access token's signature and registered claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The validated claims
    /// * `Err(DomainError::Token)` - Expired, not yet valid, bad signature,
    ///   or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        TokenError::TokenNotYetValid
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Generates a cryptographically random opaque refresh token value
    pub fn generate_opaque_value(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_VALUE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Hashes a token value for storage lookup
    ///
    /// Only this hash is ever persisted; a database leak does not expose
    /// usable refresh tokens.
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry_seconds
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }
}
