//! Mapping from domain errors to HTTP responses
//!
//! Refresh-token failures are deliberately collapsed into one generic
//! 401 so a caller cannot probe whether a stolen value is malformed,
//! expired, or already rotated. The precise cause is still logged.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};
use validator::ValidationErrors;

use sc_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Validation { message } => {
            warn!(%message, "request failed validation");
            ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new("not_found", format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Configuration { message } => {
            error!(%message, "configuration error");
            internal_error_response()
        }
        DomainError::Internal { message } => {
            error!(%message, "internal error");
            internal_error_response()
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        // Unknown login and wrong password answer identically.
        AuthError::InvalidCredentials | AuthError::UserNotFound => {
            warn!("authentication failed");
            ErrorResponse::new("invalid_credentials", "Invalid login or password")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        AuthError::UserAlreadyExists => {
            ErrorResponse::new("user_already_exists", "An account with this login already exists")
                .to_response(StatusCode::CONFLICT)
        }
        AuthError::InvalidLoginFormat => {
            ErrorResponse::new("invalid_login_format", "Login contains invalid characters")
                .to_response(StatusCode::BAD_REQUEST)
        }
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    match error {
        TokenError::TokenGenerationFailed => {
            error!("token generation failed");
            internal_error_response()
        }
        // Every verification and refresh failure collapses to the same
        // generic 401; the variant only reaches the logs.
        other => {
            warn!(cause = %other, "token rejected");
            ErrorResponse::new("invalid_token", "Authentication required")
                .to_response(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Convert request body validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let details = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let codes: Vec<_> = field_errors.iter().map(|e| e.code.to_string()).collect();
            (field.to_string(), serde_json::json!(codes))
        })
        .collect();

    ErrorResponse::new("validation_error", "Request validation failed")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}

fn internal_error_response() -> HttpResponse {
    ErrorResponse::new("internal_error", "An internal error occurred")
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}
