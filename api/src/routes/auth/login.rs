use actix_web::{web, HttpResponse};
use validator::Validate;

use sc_core::repositories::{TokenRepository, UserRepository};

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates by login and password and returns a token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "login": "admin",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "opaque_value",
///     "expires_in": 900,
///     "role": "admin"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed request body
/// - 401 Unauthorized: Unknown login or wrong password
/// - 500 Internal Server Error: Token generation or storage failure
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.login(&request.login, &request.password).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
