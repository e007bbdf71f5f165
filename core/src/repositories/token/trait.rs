//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the database.
/// Implementations should handle token storage, retrieval, revocation, and
/// deletion.
///
/// # Security Considerations
/// - Only token hashes are stored, never the opaque values themselves
/// - `revoke_token` must be a test-and-set: concurrent revocations of the
///   same hash may report success to at most one caller
/// - Expired tokens should be periodically cleaned up
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token hash)
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use chrono::Duration;
    /// # use sc_core::repositories::TokenRepository;
    /// # use sc_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::new_v4();
    /// let token = RefreshToken::new(user_id, "hashed_token_value".to_string(), Duration::days(7));
    ///
    /// let saved = repo.save_refresh_token(token).await?;
    /// println!("Token saved with ID: {}", saved.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    ///
    /// Returns the row whether or not it has expired or been revoked; the
    /// caller classifies the state.
    ///
    /// # Arguments
    /// * `token_hash` - The hashed token value to search for
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token found with given hash
    /// * `Err(DomainError)` - Database error occurred
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Find all refresh tokens for a user, newest first
    ///
    /// Expired and revoked rows are included so callers can report their
    /// state; use [`count_active_tokens`](Self::count_active_tokens) for the
    /// active subset.
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Vec<RefreshToken>)` - Tokens ordered by creation time descending
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Revoke a refresh token if it is not already revoked
    ///
    /// This is a test-and-set operation: of any number of concurrent calls
    /// with the same hash, at most one observes `true`. Rotation relies on
    /// this to guarantee a single winner when a stale token value is
    /// replayed.
    ///
    /// # Arguments
    /// * `token_hash` - The hashed token value to revoke
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the revocation
    /// * `Ok(false)` - Token not found or already revoked
    /// * `Err(DomainError)` - Revocation failed
    ///
    /// # Example
    /// ```no_run
    /// # use sc_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token_hash = "sha256_hash_of_token";
    ///
    /// if repo.revoke_token(token_hash).await? {
    ///     println!("Token claimed by this caller");
    /// } else {
    ///     println!("Token already revoked or missing");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete all refresh tokens for a user
    ///
    /// Used on logout and when a fresh token supersedes existing rows.
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete expired refresh tokens from the repository
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;

    /// Find the user's most recent refresh token, if any
    ///
    /// The returned row may be expired or revoked; absence means the user
    /// holds no token at all.
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - The newest token row
    /// * `Ok(None)` - The user has no token rows
    /// * `Err(DomainError)` - Database error occurred
    async fn find_current_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.find_by_user_id(user_id).await?;
        Ok(tokens.into_iter().next())
    }

    /// Count active (non-expired, non-revoked) tokens for a user
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of active tokens
    /// * `Err(DomainError)` - Database error occurred
    async fn count_active_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let tokens = self.find_by_user_id(user_id).await?;
        Ok(tokens.iter().filter(|t| t.is_valid()).count())
    }
}
