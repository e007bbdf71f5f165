//! JWT authentication middleware for protected endpoints
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! with the shared [`AccessTokenGenerator`], and injects an
//! [`AuthContext`] into the request extensions. Handlers receive the
//! context through its `FromRequest` implementation.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::debug;
use uuid::Uuid;

use sc_core::domain::entities::token::Claims;
use sc_core::errors::{DomainError, TokenError};
use sc_core::services::token::AccessTokenGenerator;

use crate::dto::ErrorResponse;

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token's subject claim
    pub user_id: Uuid,
    /// Role names granted to the caller
    pub roles: Vec<String>,
    /// JWT ID, unique per issued token
    pub jti: String,
}

impl AuthContext {
    /// Build a context from verified claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            roles: claims.roles,
            jti: claims.jti,
        })
    }

    /// Whether the caller holds the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| ErrorUnauthorized("Authentication required")))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Arc<AccessTokenGenerator>,
}

impl JwtAuth {
    /// Create the middleware around a shared token verifier
    pub fn new(verifier: Arc<AccessTokenGenerator>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<AccessTokenGenerator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    debug!("request without a bearer token");
                    return Ok(unauthorized_response(req));
                }
            };

            // The rejection cause stays in the logs; the response never
            // distinguishes expired from forged tokens.
            let claims = match verifier.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(error) => {
                    debug!(cause = %error, "access token rejected");
                    return Ok(unauthorized_response(req));
                }
            };

            let context = match AuthContext::from_claims(claims) {
                Ok(context) => context,
                Err(error) => {
                    debug!(cause = %error, "access token carried unusable claims");
                    return Ok(unauthorized_response(req));
                }
            };

            req.extensions_mut().insert(context);
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// The same 401 envelope every other rejected token gets; missing,
/// forged, and expired tokens are indistinguishable to the caller.
fn unauthorized_response<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    let (req, _payload) = req.into_parts();
    let response = ErrorResponse::new("invalid_token", "Authentication required")
        .to_response(StatusCode::UNAUTHORIZED)
        .map_into_right_body();
    ServiceResponse::new(req, response)
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn claims_for(user_id: Uuid) -> Claims {
        Claims::new_access_token(
            user_id,
            vec!["admin".to_string(), "user".to_string()],
            "streetcode",
            "streetcode-api",
            chrono::Duration::minutes(15),
        )
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let context = AuthContext::from_claims(claims_for(user_id)).unwrap();

        assert_eq!(context.user_id, user_id);
        assert!(context.has_role("admin"));
        assert!(!context.has_role("editor"));
    }

    #[test]
    fn test_auth_context_rejects_malformed_subject() {
        let mut claims = claims_for(Uuid::new_v4());
        claims.sub = "not-a-uuid".to_string();

        assert!(AuthContext::from_claims(claims).is_err());
    }
}
