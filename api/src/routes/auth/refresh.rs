use actix_web::{web, HttpResponse};
use validator::Validate;

use sc_core::repositories::{TokenRepository, UserRepository};

use crate::dto::auth_dto::{AuthResponse, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new token pair. The presented value
/// is revoked in the same step, so each refresh token works exactly
/// once.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "new_opaque_value",
///     "expires_in": 900,
///     "role": "admin"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown, expired, or already-used refresh token
/// - 500 Internal Server Error: Token generation or storage failure
pub async fn refresh<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
