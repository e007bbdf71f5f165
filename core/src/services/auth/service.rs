//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use sc_shared::utils::validation::{is_valid_login, normalize_login};

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};

/// Authentication service orchestrating login, token refresh, and logout
///
/// Thin layer over the credential store and the [`TokenService`]; all
/// refresh-token state transitions live in the latter.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for the access/refresh token lifecycle
    token_service: Arc<TokenService<T>>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for token issuance and rotation
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<T>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate a user by login and password and issue a token pair
    ///
    /// A missing user and a wrong password are deliberately
    /// indistinguishable: both fail with `AuthError::InvalidCredentials`.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Access token, fresh refresh token, expiry,
    ///   and the user's role
    /// * `Err(AuthError::InvalidCredentials)` - Unknown login or wrong
    ///   password
    pub async fn login(&self, login: &str, password: &str) -> DomainResult<AuthResponse> {
        let login = normalize_login(login);

        let user = match self.user_repository.find_by_login(login).await? {
            Some(user) => user,
            None => {
                warn!(login, "login attempt for unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_token_pair(&user).await?;
        info!(user_id = %user.id, role = %user.role, "user logged in");

        Ok(AuthResponse::from_token_pair(pair, user.role))
    }

    /// Exchange a refresh token for a new access + refresh token pair
    ///
    /// Rotation-on-use: the presented value is revoked and replaced, so a
    /// stolen token stops working after its first use.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The rotated pair and the user's role
    /// * `Err(TokenError)` - Invalid, expired, or revoked value
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let user_id = self.token_service.refresh_token_owner(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let pair = self
            .token_service
            .rotate_refresh_token(refresh_token, &user)
            .await?;

        Ok(AuthResponse::from_token_pair(pair, user.role))
    }

    /// Log a user out by deleting their refresh tokens
    ///
    /// The outstanding access token stays valid until its short expiry;
    /// only the refresh capability is removed.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.token_service.delete_refresh_token(user_id).await?;
        info!(user_id = %user_id, "user logged out");
        Ok(())
    }

    /// Create the administrative account at startup when absent
    ///
    /// There is no public registration endpoint; this is the only path
    /// that creates users.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - The admin account was created
    /// * `Ok(None)` - An account with this login already exists
    /// * `Err(AuthError::InvalidLoginFormat)` - The configured login is not
    ///   a valid login name
    pub async fn seed_admin(&self, login: &str, password: &str) -> DomainResult<Option<User>> {
        let login = normalize_login(login);
        if !is_valid_login(login) {
            return Err(AuthError::InvalidLoginFormat.into());
        }

        if self.user_repository.exists_by_login(login).await? {
            return Ok(None);
        }

        let password_hash = hash_password(password)?;
        let admin = User::new(login.to_string(), password_hash, Role::Admin);
        let created = self.user_repository.create(admin).await?;

        info!(user_id = %created.id, login, "seeded admin account");
        Ok(Some(created))
    }
}
