//! Database connection pool management
//!
//! Connection pooling over SQLx with MySQL: pool sizing, timeouts, and a
//! liveness probe, all driven by [`DatabaseConfig`].

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use tracing::log::LevelFilter;

use sc_core::errors::DomainError;
use sc_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration settings
///
/// # Returns
/// * `Ok(MySqlPool)` - Connected pool, verified by an initial acquire
/// * `Err(DomainError)` - Invalid URL (`Configuration`) or connection
///   failure (`Internal`)
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    let connect_options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::Configuration {
            message: format!("Invalid database URL: {}", e),
        })?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
        .map_err(|e| {
            tracing::error!("failed to create database pool: {}", e);
            DomainError::Internal {
                message: format!("Failed to connect to database: {}", e),
            }
        })?;

    tracing::info!("database connection pool ready");
    Ok(pool)
}

/// Check database connectivity with a trivial query
pub async fn health_check(pool: &MySqlPool) -> Result<(), DomainError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| DomainError::Internal {
            message: format!("Database health check failed: {}", e),
        })
}
