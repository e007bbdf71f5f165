use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sc_api::app::create_app;
use sc_api::routes::auth::AppState;
use sc_core::services::auth::AuthService;
use sc_core::services::token::{AccessTokenGenerator, TokenService, TokenServiceConfig};
use sc_infra::database::connection::{create_pool, health_check};
use sc_infra::database::mysql::{MySqlTokenRepository, MySqlUserRepository};
use sc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "starting Streetcode API server");

    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("using the default JWT secret; set JWT_SECRET before deploying");
    }

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    health_check(&pool)
        .await
        .context("database health check failed")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository = MySqlTokenRepository::new(pool);

    let token_config = TokenServiceConfig::from(&config.auth);
    let token_verifier = Arc::new(
        AccessTokenGenerator::new(token_config.clone())
            .context("invalid JWT configuration")?,
    );
    let token_service = Arc::new(
        TokenService::new(token_repository, token_config)
            .context("invalid JWT configuration")?,
    );
    let auth_service = Arc::new(AuthService::new(user_repository, token_service));

    if let Some(admin) = &config.auth.admin {
        auth_service
            .seed_admin(&admin.login, &admin.password)
            .await
            .context("failed to seed the admin account")?;
    }

    let app_state = web::Data::new(AppState {
        auth_service,
        token_verifier,
        cors: config.cors.clone(),
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "binding HTTP server");

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
