//! Authentication routes
//!
//! `/api/v1/auth/login`, `/api/v1/auth/refresh`, and `/api/v1/auth/logout`.

pub mod login;
pub mod logout;
pub mod refresh;

use std::sync::Arc;

use sc_core::repositories::{TokenRepository, UserRepository};
use sc_core::services::auth::AuthService;
use sc_core::services::token::AccessTokenGenerator;
use sc_shared::config::CorsConfig;

/// Shared application state injected into handlers
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Authentication service handling login, refresh, and logout
    pub auth_service: Arc<AuthService<U, T>>,
    /// Verifier for bearer tokens on protected routes
    pub token_verifier: Arc<AccessTokenGenerator>,
    /// CORS policy applied to every worker's app instance
    pub cors: CorsConfig,
}
