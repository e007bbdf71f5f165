//! Integration tests for the logout endpoint and bearer middleware

use actix_web::{http::header, test, web};
use std::sync::Arc;

use sc_api::app::create_app;
use sc_api::routes::auth::AppState;
use sc_core::repositories::{MockTokenRepository, MockUserRepository};
use sc_core::services::auth::AuthService;
use sc_core::services::token::{AccessTokenGenerator, TokenService, TokenServiceConfig};
use sc_shared::config::CorsConfig;

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
const ADMIN_LOGIN: &str = "admin";
const ADMIN_PASSWORD: &str = "correct-horse-battery";

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..TokenServiceConfig::default()
    }
}

async fn build_state() -> web::Data<AppState<MockUserRepository, MockTokenRepository>> {
    let users = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(
        TokenService::new(MockTokenRepository::new(), test_config()).unwrap(),
    );
    let auth_service = Arc::new(AuthService::new(users, token_service));
    let token_verifier = Arc::new(AccessTokenGenerator::new(test_config()).unwrap());

    auth_service
        .seed_admin(ADMIN_LOGIN, ADMIN_PASSWORD)
        .await
        .unwrap();

    web::Data::new(AppState {
        auth_service,
        token_verifier,
        cors: CorsConfig::development(),
    })
}

fn login_request() -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "login": ADMIN_LOGIN,
            "password": ADMIN_PASSWORD,
        }))
}

fn logout_request(access_token: &str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
}

#[actix_web::test]
async fn test_logout_success() {
    let app = test::init_service(create_app(build_state().await)).await;

    let resp = test::call_service(&app, login_request().to_request()).await;
    assert_eq!(resp.status(), 200);
    let login_body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = login_body["access_token"].as_str().unwrap();

    let resp = test::call_service(&app, logout_request(access_token).to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");
}

#[actix_web::test]
async fn test_logout_invalidates_refresh_token() {
    let app = test::init_service(create_app(build_state().await)).await;

    let resp = test::call_service(&app, login_request().to_request()).await;
    let login_body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = login_body["access_token"].as_str().unwrap();
    let refresh_token = login_body["refresh_token"].as_str().unwrap();

    let resp = test::call_service(&app, logout_request(access_token).to_request()).await;
    assert_eq!(resp.status(), 200);

    let refresh = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh_token": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, refresh).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_without_auth() {
    let app = test::init_service(create_app(build_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Middleware rejections carry the same JSON envelope as every
    // other 401.
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_token");
    assert_eq!(body["message"], "Authentication required");
}

#[actix_web::test]
async fn test_logout_with_garbage_token() {
    let app = test::init_service(create_app(build_state().await)).await;

    let resp = test::call_service(&app, logout_request("not.a.jwt").to_request()).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_token");
}

#[actix_web::test]
async fn test_logout_with_wrong_scheme() {
    let app = test::init_service(create_app(build_state().await)).await;

    let resp = test::call_service(&app, login_request().to_request()).await;
    let login_body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = login_body["access_token"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header((header::AUTHORIZATION, format!("Basic {}", access_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_token");
}
