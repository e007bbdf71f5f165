//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::Role;

/// Authentication response containing tokens and user metadata
///
/// Returned after a successful login or token refresh:
/// - JWT access token and opaque refresh token
/// - Access token expiration time
/// - The authenticated user's role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Role of the authenticated user ("user" or "admin")
    pub role: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        role: String,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            role,
        }
    }

    /// Creates an authentication response from a token pair and the user's role
    pub fn from_token_pair(token_pair: TokenPair, role: Role) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
            role: role.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_pair() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 900, 604800);
        let response = AuthResponse::from_token_pair(pair, Role::Admin);

        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.expires_in, 900);
        assert_eq!(response.role, "admin");
    }
}
