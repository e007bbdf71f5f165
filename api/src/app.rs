//! Application factory
//!
//! Builds the Actix-web application from a prepared [`AppState`]. Kept
//! generic over the repository types so tests can run the full HTTP
//! stack against in-memory mocks.

use actix_web::{http::StatusCode, web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sc_core::repositories::{TokenRepository, UserRepository};

use crate::dto::ErrorResponse;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, refresh::refresh, AppState};

/// Create and configure the application with all routes and middleware
pub fn create_app<U, T>(
    app_state: web::Data<AppState<U, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    let cors = create_cors(&app_state.cors);
    let jwt = JwtAuth::new(app_state.token_verifier.clone());

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<U, T>))
                    .route("/refresh", web::post().to(refresh::<U, T>))
                    .route("/logout", web::post().to(logout::<U, T>).wrap(jwt)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "streetcode-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
