use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub login: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/refresh
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Response body for successful login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub role: String,
}

impl From<sc_core::domain::value_objects::AuthResponse> for AuthResponse {
    fn from(response: sc_core::domain::value_objects::AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in,
            role: response.role,
        }
    }
}

/// Response body for POST /api/v1/auth/logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

impl LogoutResponse {
    pub fn new() -> Self {
        Self {
            message: "Logged out successfully".to_string(),
        }
    }
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self::new()
    }
}
