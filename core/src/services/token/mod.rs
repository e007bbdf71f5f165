//! Token issuance, verification, and refresh-token lifecycle.
//!
//! The module splits into a stateless [`AccessTokenGenerator`] (JWT signing
//! and verification, opaque value generation) and a [`TokenService`] that
//! owns the refresh-token state machine over a [`TokenRepository`].
//!
//! [`TokenRepository`]: crate::repositories::TokenRepository

pub mod config;
pub mod generator;
pub mod service;

pub use config::TokenServiceConfig;
pub use generator::AccessTokenGenerator;
pub use service::TokenService;

#[cfg(test)]
mod tests;
