use actix_web::{web, HttpResponse};

use sc_core::repositories::{TokenRepository, UserRepository};

use crate::dto::auth_dto::LogoutResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Deletes the caller's refresh tokens. Requires a valid bearer token;
/// the outstanding access token stays usable until its short expiry.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 500 Internal Server Error: Storage failure
pub async fn logout<U, T>(state: web::Data<AppState<U, T>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.auth_service.logout(auth.user_id).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse::new()),
        Err(error) => handle_domain_error(error),
    }
}
