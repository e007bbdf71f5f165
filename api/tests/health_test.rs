//! Integration tests for the health probe and default handler

use actix_web::{test, web};
use std::sync::Arc;

use sc_api::app::create_app;
use sc_api::routes::auth::AppState;
use sc_core::repositories::{MockTokenRepository, MockUserRepository};
use sc_core::services::auth::AuthService;
use sc_core::services::token::{AccessTokenGenerator, TokenService, TokenServiceConfig};
use sc_shared::config::CorsConfig;

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "integration-test-secret-0123456789abcdef".to_string(),
        ..TokenServiceConfig::default()
    }
}

fn build_state() -> web::Data<AppState<MockUserRepository, MockTokenRepository>> {
    let users = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(
        TokenService::new(MockTokenRepository::new(), test_config()).unwrap(),
    );
    let auth_service = Arc::new(AuthService::new(users, token_service));
    let token_verifier = Arc::new(AccessTokenGenerator::new(test_config()).unwrap());

    web::Data::new(AppState {
        auth_service,
        token_verifier,
        cors: CorsConfig::development(),
    })
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "streetcode-api");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
