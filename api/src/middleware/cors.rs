//! CORS configuration for the admin frontend
//!
//! Built from [`CorsConfig`], which `AppConfig::from_env` fills with a
//! permissive policy in development and an explicit origin allow-list
//! in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::info;

use sc_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        info!("CORS disabled");
        return Cors::default();
    }

    let wildcard = config.allowed_origins.iter().any(|origin| origin == "*");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age as usize);

    if wildcard {
        info!("CORS allowing any origin");
        // Browsers refuse credentialed wildcard responses, so the
        // credentials flag is ignored in this branch.
        cors = cors.allow_any_origin();
    } else {
        info!(origins = ?config.allowed_origins, "CORS restricted to configured origins");
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        if config.allow_credentials {
            cors = cors.supports_credentials();
        }
    }

    cors
}
