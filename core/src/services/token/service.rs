//! Refresh-token lifecycle service.
//!
//! Per user a refresh token moves through NoToken -> Active ->
//! Expired/Revoked. At most one active row exists per user at any time:
//! issuance deletes the user's previous rows, and rotation revokes the old
//! row before writing its replacement.

use chrono::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;
use super::generator::AccessTokenGenerator;

/// Service orchestrating issuance, lookup, rotation, and deletion of
/// refresh tokens
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    generator: AccessTokenGenerator,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` if the signing
    /// secret is missing or too short
    pub fn new(repository: R, config: TokenServiceConfig) -> Result<Self, DomainError> {
        let generator = AccessTokenGenerator::new(config)?;
        Ok(Self {
            repository,
            generator,
        })
    }

    /// The stateless generator backing this service
    pub fn generator(&self) -> &AccessTokenGenerator {
        &self.generator
    }

    /// Issues a signed access token for a user
    ///
    /// Always succeeds given the signing key validated at construction.
    pub fn issue_access_token(&self, user: &User) -> DomainResult<String> {
        self.generator.create_access_token(user)
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        self.generator.verify_access_token(token)
    }

    /// Issues a new refresh token for a user, superseding any existing rows
    ///
    /// Deletes the user's previous token rows before inserting the new one,
    /// enforcing the at-most-one-active invariant.
    ///
    /// # Returns
    ///
    /// The opaque token value to hand to the client. Only its hash is
    /// persisted.
    pub async fn issue_refresh_token(&self, user: &User) -> DomainResult<String> {
        let superseded = self.repository.delete_user_tokens(user.id).await?;
        if superseded > 0 {
            debug!(user_id = %user.id, superseded, "superseded existing refresh tokens");
        }
        self.create_refresh_row(user.id).await
    }

    /// Issues a fresh access + refresh token pair for a user
    ///
    /// Used at login; any refresh token the user already holds is
    /// superseded.
    pub async fn issue_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.generator.access_token_expiry_seconds(),
            self.generator.refresh_token_expiry_seconds(),
        ))
    }

    /// Returns the user's current refresh token row
    ///
    /// The row is returned even when expired or revoked; only the absence
    /// of any row maps to an error.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The user's newest token row
    /// * `Err(TokenError::RefreshTokenNotFound)` - The user holds no row
    pub async fn get_refresh_token(&self, user_id: Uuid) -> DomainResult<RefreshToken> {
        self.repository
            .find_current_for_user(user_id)
            .await?
            .ok_or_else(|| TokenError::RefreshTokenNotFound.into())
    }

    /// Resolves the owner of a refresh token value, validating its state
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The owning user's id; the row is active
    /// * `Err(TokenError::InvalidRefreshToken)` - No row for this value
    /// * `Err(TokenError::RefreshTokenExpired)` - The row has expired
    /// * `Err(TokenError::TokenRevoked)` - The row was already rotated or
    ///   revoked
    pub async fn refresh_token_owner(&self, token_value: &str) -> DomainResult<Uuid> {
        let row = self.find_and_classify(token_value).await?;
        Ok(row.user_id)
    }

    /// Rotates a refresh token: revokes the old row and issues a new pair
    ///
    /// The old row is claimed through the repository's test-and-set
    /// revocation *before* the replacement is written, so of any number of
    /// concurrent rotations with the same stale value exactly one succeeds
    /// and the rest fail with `TokenRevoked`. The revoked row is kept so a
    /// replayed rotation attempt reports `TokenRevoked` rather than
    /// `InvalidRefreshToken`.
    ///
    /// # Arguments
    ///
    /// * `old_token_value` - The opaque value presented by the client
    /// * `user` - The token's owner, previously resolved via
    ///   [`refresh_token_owner`](Self::refresh_token_owner)
    pub async fn rotate_refresh_token(
        &self,
        old_token_value: &str,
        user: &User,
    ) -> DomainResult<TokenPair> {
        let old_row = self.find_and_classify(old_token_value).await?;

        if old_row.user_id != user.id {
            return Err(TokenError::InvalidRefreshToken.into());
        }

        // Claim the old row first. Losing the race means another request
        // already rotated this value.
        let claimed = self.repository.revoke_token(&old_row.token_hash).await?;
        if !claimed {
            warn!(user_id = %user.id, "refresh token replay lost rotation race");
            return Err(TokenError::TokenRevoked.into());
        }

        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.create_refresh_row(user.id).await?;

        debug!(user_id = %user.id, "rotated refresh token");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.generator.access_token_expiry_seconds(),
            self.generator.refresh_token_expiry_seconds(),
        ))
    }

    /// Deletes all refresh tokens for a user (logout / forced revocation)
    ///
    /// # Returns
    ///
    /// The number of rows removed
    pub async fn delete_refresh_token(&self, user_id: Uuid) -> DomainResult<usize> {
        let deleted = self.repository.delete_user_tokens(user_id).await?;
        debug!(user_id = %user_id, deleted, "deleted refresh tokens");
        Ok(deleted)
    }

    /// Removes rows whose expiry has passed
    ///
    /// Invoked administratively; no background task calls this.
    ///
    /// # Returns
    ///
    /// The number of expired rows removed
    pub async fn delete_expired_tokens(&self) -> DomainResult<usize> {
        self.repository.delete_expired_tokens().await
    }

    /// Looks up a token row by value and classifies its state
    async fn find_and_classify(&self, token_value: &str) -> DomainResult<RefreshToken> {
        let token_hash = AccessTokenGenerator::hash_token(token_value);

        let row = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        // Revocation is checked first so a replayed (rotated) token keeps
        // reporting revoked after it has also expired.
        if row.is_revoked {
            return Err(TokenError::TokenRevoked.into());
        }
        if row.is_expired() {
            return Err(TokenError::RefreshTokenExpired.into());
        }

        Ok(row)
    }

    /// Writes a fresh refresh token row and returns the opaque value
    async fn create_refresh_row(&self, user_id: Uuid) -> DomainResult<String> {
        let token_value = self.generator.generate_opaque_value();
        let token_hash = AccessTokenGenerator::hash_token(&token_value);

        let row = RefreshToken::new(
            user_id,
            token_hash,
            Duration::seconds(self.generator.refresh_token_expiry_seconds()),
        );
        self.repository.save_refresh_token(row).await?;

        Ok(token_value)
    }
}
