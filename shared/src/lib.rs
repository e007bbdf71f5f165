//! Shared utilities and common types for the Streetcode server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Utility functions (login validation, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AdminSeedConfig, AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    ServerConfig,
};
pub use utils::validation;
